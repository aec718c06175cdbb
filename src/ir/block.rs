use crate::ir::{Instruction, Label};

/// A labeled, ordered run of instructions with no internal jump targets.
///
/// Blocks are exclusively owned by their script; jumps land on the block's
/// label, never inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    label: Label,
    instructions: Vec<Instruction>,
}

impl Block {
    pub fn new(label: Label) -> Self {
        Block {
            label,
            instructions: Vec::new(),
        }
    }

    /// Append an instruction to the end of the block.
    pub fn add(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
