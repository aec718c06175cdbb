//! # Cinder bytecode backend
//!
//! Code generation for the Cinder scripting language. The frontend (lexer,
//! parser, semantic checker) hands this crate a [`ir::Script`]: an ordered
//! collection of labeled instruction blocks whose operands are still
//! symbolic (jump labels, local variables, switch tables). The
//! [`bytecode::Assembler`] lowers that into a [`bytecode::BytecodeScript`]
//! with every operand resolved to a number: self-relative branch offsets,
//! local slot indices, jump-table indexes.
//!
//! ```
//! use cinder::ir::{Block, Instruction, Label, Locals, Operand, Script, op};
//! use cinder::bytecode::assemble;
//!
//! let entry = Label::new(0);
//! let exit = Label::new(1);
//!
//! let mut block = Block::new(entry);
//! block.add(Instruction::new(op::PUSH_INT, Operand::Int(1)));
//! block.add(Instruction::new(op::BRANCH, Operand::Jump(exit)));
//! let mut tail = Block::new(exit);
//! tail.add(Instruction::new(op::RETURN, Operand::Int(0)));
//!
//! let script = Script::new(
//!     "demo",
//!     vec![block, tail],
//!     Locals::new(),
//!     Locals::new(),
//!     Vec::new(),
//! );
//!
//! let bytecode = assemble(&script).unwrap();
//! assert_eq!(bytecode.instructions.len(), 3);
//! // The branch at address 1 targets address 2: offset 2 - 1 - 1 = 0.
//! ```

pub mod bytecode;
pub mod ir;
