use std::fmt;

/// Primitive stack category of a value.
///
/// Each kind has its own independent slot-numbering space in the assembled
/// bytecode: integer, text and wide-integer locals never share indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    Int,
    Text,
    Wide,
}

impl StackKind {
    /// All kinds, in the order the slot allocator walks them.
    pub const ALL: [StackKind; 3] = [StackKind::Int, StackKind::Text, StackKind::Wide];
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackKind::Int => write!(f, "int"),
            StackKind::Text => write!(f, "text"),
            StackKind::Wide => write!(f, "wide"),
        }
    }
}

/// Identity of a declared parameter or local variable.
///
/// Declared once by the frontend, immutable thereafter; instructions that
/// read or write the variable carry the same `Local` by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Local {
    id: u32,
    kind: StackKind,
}

impl Local {
    pub fn new(id: u32, kind: StackKind) -> Self {
        Local { id, kind }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }
}

impl fmt::Display for Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_local_{}", self.kind, self.id)
    }
}

/// Ordered declaration lists, one per stack kind.
///
/// Used for both the parameter set and the variable set of a script. Order
/// within each list is declaration order and determines slot assignment.
#[derive(Debug, Clone, Default)]
pub struct Locals {
    int: Vec<Local>,
    text: Vec<Local>,
    wide: Vec<Local>,
}

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration to the list for its own kind.
    pub fn push(&mut self, local: Local) {
        match local.kind() {
            StackKind::Int => self.int.push(local),
            StackKind::Text => self.text.push(local),
            StackKind::Wide => self.wide.push(local),
        }
    }

    pub fn of(&self, kind: StackKind) -> &[Local] {
        match kind {
            StackKind::Int => &self.int,
            StackKind::Text => &self.text,
            StackKind::Wide => &self.wide,
        }
    }

    pub fn count(&self, kind: StackKind) -> usize {
        self.of(kind).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locals_keep_declaration_order() {
        let mut locals = Locals::new();
        locals.push(Local::new(0, StackKind::Int));
        locals.push(Local::new(1, StackKind::Text));
        locals.push(Local::new(2, StackKind::Int));

        let ints = locals.of(StackKind::Int);
        assert_eq!(ints.len(), 2);
        assert_eq!(ints[0].id(), 0);
        assert_eq!(ints[1].id(), 2);

        assert_eq!(locals.count(StackKind::Text), 1);
        assert_eq!(locals.count(StackKind::Wide), 0);
    }

    #[test]
    fn test_local_identity_includes_kind() {
        let a = Local::new(0, StackKind::Int);
        let b = Local::new(0, StackKind::Text);

        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Local::new(3, StackKind::Wide).to_string(), "wide_local_3");
        assert_eq!(StackKind::Text.to_string(), "text");
    }
}
