use crate::ir::Label;

/// Index of a switch table within its owning script's table list.
///
/// Tables are owned once by the script and referenced from the single
/// instruction that dispatches through them; the index makes that
/// ownership structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(u32);

impl TableId {
    pub fn new(index: u32) -> Self {
        TableId(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// One arm of a switch dispatch: a set of integer keys sharing a target.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    keys: Vec<i32>,
    target: Label,
}

impl SwitchCase {
    pub fn new(keys: Vec<i32>, target: Label) -> Self {
        SwitchCase { keys, target }
    }

    pub fn keys(&self) -> &[i32] {
        &self.keys
    }

    pub fn target(&self) -> Label {
        self.target
    }
}

/// An ordered list of switch cases.
///
/// Keys must be unique across the whole table; the assembler rejects
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchTable {
    cases: Vec<SwitchCase>,
}

impl SwitchTable {
    pub fn new(cases: Vec<SwitchCase>) -> Self {
        SwitchTable { cases }
    }

    pub fn cases(&self) -> &[SwitchCase] {
        &self.cases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_accessors() {
        let case = SwitchCase::new(vec![1, 2], Label::new(5));

        assert_eq!(case.keys(), &[1, 2]);
        assert_eq!(case.target(), Label::new(5));
    }

    #[test]
    fn test_table_preserves_case_order() {
        let table = SwitchTable::new(vec![
            SwitchCase::new(vec![3], Label::new(0)),
            SwitchCase::new(vec![1], Label::new(1)),
        ]);

        assert_eq!(table.cases()[0].keys(), &[3]);
        assert_eq!(table.cases()[1].keys(), &[1]);
    }

    #[test]
    fn test_table_id_index() {
        assert_eq!(TableId::new(2).index(), 2);
    }
}
