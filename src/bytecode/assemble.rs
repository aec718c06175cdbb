use std::collections::{HashMap, HashSet};

use crate::bytecode::assemble_error::AssembleError;
use crate::bytecode::output::{BytecodeInstruction, BytecodeOperand, BytecodeScript, JumpTable};
use crate::ir::{Label, Local, Opcode, Operand, Script, StackKind};

/// An output-format backend for assembled scripts.
///
/// There is one writer per target format; all of them consume the same IR.
pub trait CodeWriter {
    type Output;
    type Error;

    fn write(&self, script: &Script) -> Result<Self::Output, Self::Error>;
}

/// The bytecode writer: lowers a [`Script`] to a [`BytecodeScript`].
///
/// Stateless; each call is a pure function of its input. Assembly either
/// fully succeeds or aborts, there are no partial results.
#[derive(Debug, Default)]
pub struct Assembler;

/// Assemble a script with the default writer.
pub fn assemble(script: &Script) -> Result<BytecodeScript, AssembleError> {
    Assembler.write(script)
}

impl CodeWriter for Assembler {
    type Output = BytecodeScript;
    type Error = AssembleError;

    fn write(&self, script: &Script) -> Result<BytecodeScript, AssembleError> {
        let addresses = build_address_table(script);
        let slots = build_slot_table(script);

        let num_int_parameters = script.parameters(StackKind::Int).len();
        let num_text_parameters = script.parameters(StackKind::Text).len();
        let num_wide_parameters = script.parameters(StackKind::Wide).len();
        let num_int_locals = script.variables(StackKind::Int).len() + num_int_parameters;
        let num_text_locals = script.variables(StackKind::Text).len() + num_text_parameters;
        let num_wide_locals = script.variables(StackKind::Wide).len() + num_wide_parameters;

        let mut instructions = Vec::new();
        let mut jump_tables = Vec::new();

        // Pass 3 must walk blocks in the same order as pass 1; the running
        // instruction count IS the address table's addressing scheme.
        for block in script.blocks() {
            for instruction in block.instructions() {
                let address = instructions.len();
                let opcode = instruction.opcode();

                let operand = match instruction.operand() {
                    Operand::Jump(label) => {
                        let target = lookup_address(&addresses, *label, opcode)?;
                        BytecodeOperand::Int(relative_offset(target, address))
                    }
                    Operand::Table(id) => {
                        let table = script.switch_table(*id).ok_or_else(|| {
                            AssembleError::unresolved_operand(
                                opcode,
                                format!("no switch table at index {}", id.index()),
                            )
                        })?;

                        let mut entries = Vec::new();
                        let mut seen = HashSet::new();
                        for case in table.cases() {
                            let target = lookup_address(&addresses, case.target(), opcode)?;
                            let jump = relative_offset(target, address);
                            for &key in case.keys() {
                                if !seen.insert(key) {
                                    return Err(AssembleError::duplicate_case_key(key));
                                }
                                entries.push((key, jump));
                            }
                        }

                        // Tables are indexed in emission order, not in the
                        // order of the script's own table list.
                        let index = jump_tables.len() as i32;
                        jump_tables.push(JumpTable { entries });
                        BytecodeOperand::Int(index)
                    }
                    Operand::Local(local) => {
                        let slot = slots.get(local).ok_or_else(|| {
                            AssembleError::unresolved_operand(
                                opcode,
                                format!("undeclared local {}", local),
                            )
                        })?;
                        BytecodeOperand::Int(*slot as i32)
                    }
                    Operand::Int(value) => BytecodeOperand::Int(*value),
                    Operand::Wide(value) => BytecodeOperand::Wide(*value),
                    Operand::Text(value) => BytecodeOperand::Text(value.clone()),
                    Operand::Unset => {
                        return Err(AssembleError::unsupported_operand(
                            opcode,
                            instruction.operand().kind_name(),
                        ));
                    }
                };

                instructions.push(BytecodeInstruction {
                    code: opcode.code(),
                    wide: opcode.is_wide(),
                    operand,
                });
            }
        }

        Ok(BytecodeScript {
            name: script.name().to_string(),
            num_int_parameters: num_int_parameters as u32,
            num_text_parameters: num_text_parameters as u32,
            num_wide_parameters: num_wide_parameters as u32,
            num_int_locals: num_int_locals as u32,
            num_text_locals: num_text_locals as u32,
            num_wide_locals: num_wide_locals as u32,
            instructions,
            jump_tables,
        })
    }
}

/// Pass 1: entry address of every block, walking in program order.
fn build_address_table(script: &Script) -> HashMap<Label, usize> {
    let mut table = HashMap::new();
    let mut address = 0;
    for block in script.blocks() {
        table.insert(block.label(), address);
        address += block.len();
    }
    table
}

/// Pass 2: slot index of every declared local.
///
/// Parameters first, then variables, with an independent zero-based
/// counter per stack kind; parameters always get the lowest indices of
/// their kind.
fn build_slot_table(script: &Script) -> HashMap<Local, usize> {
    let mut table = HashMap::new();
    for kind in StackKind::ALL {
        let declarations = script
            .parameters(kind)
            .iter()
            .chain(script.variables(kind).iter());
        for (slot, local) in declarations.enumerate() {
            table.insert(*local, slot);
        }
    }
    table
}

fn lookup_address(
    addresses: &HashMap<Label, usize>,
    label: Label,
    opcode: Opcode,
) -> Result<usize, AssembleError> {
    addresses.get(&label).copied().ok_or_else(|| {
        AssembleError::unresolved_operand(opcode, format!("no block for {}", label))
    })
}

/// Self-relative offset: added to the address of the instruction after the
/// jump to reach the target. Offset 0 jumps to the very next instruction.
fn relative_offset(target: usize, address: usize) -> i32 {
    target as i32 - address as i32 - 1
}
