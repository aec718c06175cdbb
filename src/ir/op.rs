use std::fmt;

// =============================================================================
// OPCODE - numeric operation identifiers
// =============================================================================

/// Numeric identifier of a bytecode operation.
///
/// The `wide` flag selects the wide operand encoding in the serialized
/// form; it is carried through assembly untouched. What kind of operand an
/// opcode expects (jump target, local, switch table, literal) is a
/// convention between instruction selection and the virtual machine; the
/// assembler only resolves whatever kind it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    code: u32,
    wide: bool,
}

impl Opcode {
    pub const fn new(code: u32, wide: bool) -> Self {
        Opcode { code, wide }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opcode {}", self.code)
    }
}

// =============================================================================
// Well-known opcodes
// =============================================================================

/// Push an int literal. Operand: int literal.
pub const PUSH_INT: Opcode = Opcode::new(0, true);
/// Push a text literal. Operand: text literal.
pub const PUSH_TEXT: Opcode = Opcode::new(1, false);
/// Push a wide-integer literal. Operand: wide literal.
pub const PUSH_WIDE: Opcode = Opcode::new(2, true);

/// Push the value of an int local. Operand: local.
pub const LOAD_INT: Opcode = Opcode::new(3, false);
/// Pop into an int local. Operand: local.
pub const STORE_INT: Opcode = Opcode::new(4, false);
/// Push the value of a text local. Operand: local.
pub const LOAD_TEXT: Opcode = Opcode::new(5, false);
/// Pop into a text local. Operand: local.
pub const STORE_TEXT: Opcode = Opcode::new(6, false);
/// Push the value of a wide local. Operand: local.
pub const LOAD_WIDE: Opcode = Opcode::new(7, false);
/// Pop into a wide local. Operand: local.
pub const STORE_WIDE: Opcode = Opcode::new(8, false);

/// Unconditional branch. Operand: jump target.
pub const BRANCH: Opcode = Opcode::new(10, true);
/// Pop a condition, branch when it is zero. Operand: jump target.
pub const BRANCH_IF_FALSE: Opcode = Opcode::new(11, true);
/// Pop a condition, branch when it is non-zero. Operand: jump target.
pub const BRANCH_IF_TRUE: Opcode = Opcode::new(12, true);
/// Pop a key, branch through a jump table. Operand: switch table.
pub const SWITCH: Opcode = Opcode::new(13, true);
/// Leave the script. Operand: unused int 0.
pub const RETURN: Opcode = Opcode::new(14, false);

/// Integer arithmetic. Operand: unused int 0.
pub const ADD: Opcode = Opcode::new(20, false);
pub const SUB: Opcode = Opcode::new(21, false);
pub const MUL: Opcode = Opcode::new(22, false);
pub const DIV: Opcode = Opcode::new(23, false);

/// Concatenate two text values. Operand: unused int 0.
pub const JOIN_TEXT: Opcode = Opcode::new(30, false);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_accessors() {
        assert_eq!(PUSH_INT.code(), 0);
        assert!(PUSH_INT.is_wide());
        assert!(!RETURN.is_wide());
    }

    #[test]
    fn test_opcode_display() {
        assert_eq!(SWITCH.to_string(), "opcode 13");
    }

    #[test]
    fn test_well_known_codes_are_distinct() {
        let codes = [
            PUSH_INT, PUSH_TEXT, PUSH_WIDE, LOAD_INT, STORE_INT, LOAD_TEXT, STORE_TEXT, LOAD_WIDE,
            STORE_WIDE, BRANCH, BRANCH_IF_FALSE, BRANCH_IF_TRUE, SWITCH, RETURN, ADD, SUB, MUL,
            DIV, JOIN_TEXT,
        ];

        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
