use crate::ir::Opcode;

/// Fatal assembly failure.
///
/// Every variant means the IR handed to the assembler was malformed, which
/// is a defect in an upstream stage rather than a user-facing language
/// error. Nothing here is retried or downgraded to a warning; the script
/// being assembled is abandoned.
#[derive(Debug, Clone, PartialEq)]
pub enum AssembleError {
    /// The operand's kind is none of jump target, local, switch table or
    /// literal.
    UnsupportedOperand { opcode: Opcode, kind: &'static str },

    /// A symbolic operand did not resolve: a jump to a label with no
    /// block, a reference to an undeclared local, or a table id outside
    /// the script's table list.
    UnresolvedOperand { opcode: Opcode, detail: String },

    /// Two cases of one switch table claim the same key.
    DuplicateCaseKey { key: i32 },
}

impl AssembleError {
    pub fn unsupported_operand(opcode: Opcode, kind: &'static str) -> Self {
        AssembleError::UnsupportedOperand { opcode, kind }
    }

    pub fn unresolved_operand(opcode: Opcode, detail: impl Into<String>) -> Self {
        AssembleError::UnresolvedOperand {
            opcode,
            detail: detail.into(),
        }
    }

    pub fn duplicate_case_key(key: i32) -> Self {
        AssembleError::DuplicateCaseKey { key }
    }
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssembleError::UnsupportedOperand { opcode, kind } => {
                write!(f, "assemble error: unsupported operand kind '{}' for {}", kind, opcode)
            }
            AssembleError::UnresolvedOperand { opcode, detail } => {
                write!(
                    f,
                    "assemble error: operands must never be absent: {} for {}",
                    detail, opcode
                )
            }
            AssembleError::DuplicateCaseKey { key } => {
                write!(f, "assemble error: duplicate switch case key {}", key)
            }
        }
    }
}

impl std::error::Error for AssembleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::op;

    #[test]
    fn test_unsupported_operand_display() {
        let err = AssembleError::unsupported_operand(op::PUSH_INT, "unset");

        let msg = err.to_string();
        assert!(msg.contains("unsupported operand kind"));
        assert!(msg.contains("unset"));
        assert!(msg.contains("opcode 0"));
    }

    #[test]
    fn test_unresolved_operand_display() {
        let err = AssembleError::unresolved_operand(op::BRANCH, "no block for label_4");

        let msg = err.to_string();
        assert!(msg.contains("operands must never be absent"));
        assert!(msg.contains("label_4"));
        assert!(msg.contains("opcode 10"));
    }

    #[test]
    fn test_duplicate_case_key_display() {
        let err = AssembleError::duplicate_case_key(7);

        let msg = err.to_string();
        assert!(msg.contains("duplicate switch case key 7"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = AssembleError::duplicate_case_key(0);
        let _: &dyn std::error::Error = &err;
    }
}
