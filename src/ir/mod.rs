//! # Cinder intermediate representation
//!
//! The unit of compilation output before assembly: a [`Script`] owns an
//! ordered list of labeled [`Block`]s, the declared parameters and local
//! variables, and the switch tables. Instructions reference all of these
//! symbolically through lightweight copyable ids ([`Label`], [`Local`],
//! [`TableId`]); the assembler resolves them against the script-owned
//! tables.
//!
//! Iteration order of the block list is load-bearing: it defines program
//! order and fallthrough adjacency, and every pass that walks it must see
//! the same order.

pub mod block;
pub mod instruction;
pub mod label;
pub mod local;
pub mod op;
pub mod script;
pub mod switch;

pub use block::Block;
pub use instruction::{Instruction, Operand};
pub use label::Label;
pub use local::{Local, Locals, StackKind};
pub use op::Opcode;
pub use script::Script;
pub use switch::{SwitchCase, SwitchTable, TableId};
