//! # Bytecode assembly
//!
//! Lowers an [`ir::Script`](crate::ir::Script) into its final linear form:
//! symbolic jump targets become self-relative offsets, local references
//! become slot indices, switch tables are extracted into an ordered
//! side-table, literals pass through. The result is a [`BytecodeScript`]
//! ready for serialization.

pub mod assemble;
pub mod assemble_error;
pub mod disasm;
pub mod output;

pub use assemble::{Assembler, CodeWriter, assemble};
pub use assemble_error::AssembleError;
pub use output::{BytecodeInstruction, BytecodeOperand, BytecodeScript, JumpTable};
