use std::collections::HashMap;

use crate::ir::{Block, Label, Local, Locals, StackKind, SwitchTable, TableId};

/// A compiled script before assembly.
///
/// The block list is the primary representation: its order defines program
/// order and fallthrough adjacency, and every pass that walks it sees the
/// same order. A label lookup index is built once at construction for fast
/// label queries; it never drives iteration.
///
/// Scripts are built by instruction selection and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    blocks: Vec<Block>,
    index: HashMap<Label, usize>,
    parameters: Locals,
    variables: Locals,
    switch_tables: Vec<SwitchTable>,
}

impl Script {
    pub fn new(
        name: impl Into<String>,
        blocks: Vec<Block>,
        parameters: Locals,
        variables: Locals,
        switch_tables: Vec<SwitchTable>,
    ) -> Self {
        let index = blocks
            .iter()
            .enumerate()
            .map(|(position, block)| (block.label(), position))
            .collect();

        Script {
            name: name.into(),
            blocks,
            index,
            parameters,
            variables,
            switch_tables,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The blocks in program order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, label: Label) -> Option<&Block> {
        self.index.get(&label).map(|&position| &self.blocks[position])
    }

    /// Declared parameters of the given kind, in declaration order.
    pub fn parameters(&self, kind: StackKind) -> &[Local] {
        self.parameters.of(kind)
    }

    /// Declared local variables of the given kind, in declaration order.
    /// Parameters are not included.
    pub fn variables(&self, kind: StackKind) -> &[Local] {
        self.variables.of(kind)
    }

    pub fn switch_tables(&self) -> &[SwitchTable] {
        &self.switch_tables
    }

    pub fn switch_table(&self, id: TableId) -> Option<&SwitchTable> {
        self.switch_tables.get(id.index())
    }

    /// Whether `second` immediately follows `first` in program order.
    ///
    /// Returns false if either label is absent or `first` is the last
    /// block.
    pub fn is_next_to(&self, first: Label, second: Label) -> bool {
        match self.index.get(&first) {
            Some(&position) => self
                .blocks
                .get(position + 1)
                .map(|block| block.label() == second)
                .unwrap_or(false),
            None => false,
        }
    }
}
