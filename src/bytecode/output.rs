use serde::{Deserialize, Serialize};

/// A fully assembled script.
///
/// Every operand is a concrete number or text value; nothing in here
/// refers back to the IR. This is the artifact handed to the serializer
/// and loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BytecodeScript {
    pub name: String,

    /// Parameter counts, one per stack kind. Parameters always occupy the
    /// lowest slot indices of their kind.
    pub num_int_parameters: u32,
    pub num_text_parameters: u32,
    pub num_wide_parameters: u32,

    /// Total local counts per stack kind; parameters count as locals too.
    pub num_int_locals: u32,
    pub num_text_locals: u32,
    pub num_wide_locals: u32,

    /// The flat instruction array, in program order.
    pub instructions: Vec<BytecodeInstruction>,

    /// Jump tables in the order their owning switch instructions were
    /// emitted; a switch operand is an index into this list.
    pub jump_tables: Vec<JumpTable>,
}

impl BytecodeScript {
    /// Serialize to the in-memory wire form.
    pub fn encode(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    /// Deserialize from the in-memory wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

/// One finalized instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BytecodeInstruction {
    /// Numeric opcode.
    pub code: u32,

    /// Whether the operand uses the wide encoding when serialized.
    pub wide: bool,

    /// The resolved operand. Its numeric meaning (offset, slot index,
    /// table index, literal) is implied by the opcode.
    pub operand: BytecodeOperand,
}

/// A resolved operand value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BytecodeOperand {
    /// Branch offset, slot index, jump-table index, or int literal.
    Int(i32),
    /// Wide-integer literal.
    Wide(i64),
    /// Text literal.
    Text(String),
}

/// An extracted switch dispatch table: ordered `(key, offset)` pairs.
///
/// Offsets are self-relative to the owning switch instruction, exactly
/// like branch offsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpTable {
    pub entries: Vec<(i32, i32)>,
}

impl JumpTable {
    /// Offset for a key, if the table maps it.
    pub fn lookup(&self, key: i32) -> Option<i32> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, offset)| *offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_script() -> BytecodeScript {
        BytecodeScript {
            name: "sample".to_string(),
            num_int_parameters: 1,
            num_text_parameters: 0,
            num_wide_parameters: 0,
            num_int_locals: 2,
            num_text_locals: 0,
            num_wide_locals: 0,
            instructions: vec![
                BytecodeInstruction {
                    code: 0,
                    wide: true,
                    operand: BytecodeOperand::Int(42),
                },
                BytecodeInstruction {
                    code: 14,
                    wide: false,
                    operand: BytecodeOperand::Int(0),
                },
            ],
            jump_tables: vec![JumpTable {
                entries: vec![(1, 0), (2, -3)],
            }],
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let script = sample_script();

        let bytes = script.encode().unwrap();
        let back = BytecodeScript::decode(&bytes).unwrap();

        assert_eq!(back, script);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(BytecodeScript::decode(&[0xff, 0xff, 0xff]).is_err());
    }

    #[test]
    fn test_jump_table_lookup() {
        let table = JumpTable {
            entries: vec![(1, 4), (3, -2)],
        };

        assert_eq!(table.lookup(1), Some(4));
        assert_eq!(table.lookup(3), Some(-2));
        assert_eq!(table.lookup(2), None);
    }

    #[test]
    fn test_text_operand_round_trip() {
        let mut script = sample_script();
        script.instructions.push(BytecodeInstruction {
            code: 1,
            wide: false,
            operand: BytecodeOperand::Text("hello".to_string()),
        });

        let bytes = script.encode().unwrap();
        let back = BytecodeScript::decode(&bytes).unwrap();

        assert!(matches!(
            &back.instructions[2].operand,
            BytecodeOperand::Text(s) if s == "hello"
        ));
    }
}
