use crate::ir::{Label, Local, Opcode, TableId};

// =============================================================================
// OPERAND - symbolic instruction operands
// =============================================================================

/// The single value an instruction carries before assembly.
///
/// Which variant an opcode expects is implied by the opcode itself; the
/// assembler matches exhaustively, so adding a literal kind is a
/// compile-time-checked change everywhere it must be handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Placeholder for an operand slot instruction selection never filled.
    /// Reaching the assembler with this still in place is a defect in the
    /// upstream stage and aborts assembly.
    Unset,

    /// Symbolic jump target, resolved to a self-relative offset.
    Jump(Label),

    /// Symbolic variable reference, resolved to a slot index within the
    /// local's stack kind.
    Local(Local),

    /// Symbolic switch table reference, resolved to an index into the
    /// emitted jump-table list.
    Table(TableId),

    /// Int literal, passed through unchanged.
    Int(i32),

    /// Wide-integer literal, passed through unchanged.
    Wide(i64),

    /// Text literal, passed through unchanged.
    Text(String),
}

impl Operand {
    /// Human-readable name of the operand kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Unset => "unset",
            Operand::Jump(_) => "jump target",
            Operand::Local(_) => "local",
            Operand::Table(_) => "switch table",
            Operand::Int(_) => "int literal",
            Operand::Wide(_) => "wide literal",
            Operand::Text(_) => "text literal",
        }
    }
}

/// One IR instruction: an opcode plus exactly one operand.
///
/// Opcodes without a meaningful operand carry `Operand::Int(0)` by
/// convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    opcode: Opcode,
    operand: Operand,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: Operand) -> Self {
        Instruction { opcode, operand }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }
}
