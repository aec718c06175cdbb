use crate::bytecode::output::{BytecodeInstruction, BytecodeOperand, BytecodeScript};
use crate::ir::op;

/// Render a full disassembly of an assembled script.
///
/// Shows the header counts, one line per instruction with its address and
/// resolved operand (branch operands also show the absolute target they
/// reach), and the extracted jump tables. Instructions that are branch
/// targets are marked.
pub fn disassemble_to_string(script: &BytecodeScript) -> String {
    let mut output = String::new();

    output.push_str(&format!("script {}\n", script.name));
    output.push_str(&format!(
        "  parameters: {} int, {} text, {} wide\n",
        script.num_int_parameters, script.num_text_parameters, script.num_wide_parameters
    ));
    output.push_str(&format!(
        "  locals:     {} int, {} text, {} wide\n",
        script.num_int_locals, script.num_text_locals, script.num_wide_locals
    ));
    output.push('\n');

    let targets = collect_branch_targets(script);

    for (address, instruction) in script.instructions.iter().enumerate() {
        let marker = if targets.contains(&address) { "►" } else { " " };
        output.push_str(&format!(
            "{:04} {} {}\n",
            address,
            marker,
            format_instruction(instruction, address)
        ));
    }

    for (index, table) in script.jump_tables.iter().enumerate() {
        output.push_str(&format!("\ntable {}\n", index));
        for (key, offset) in &table.entries {
            output.push_str(&format!("  {:>6} -> {:+}\n", key, offset));
        }
    }

    output
}

/// Print a disassembly to stdout.
pub fn print_script(script: &BytecodeScript) {
    print!("{}", disassemble_to_string(script));
}

/// Absolute addresses reached by any branch or jump-table entry.
///
/// Offsets are self-relative: the destination is the address after the
/// branching instruction plus the offset.
fn collect_branch_targets(script: &BytecodeScript) -> Vec<usize> {
    let mut targets = Vec::new();

    for (address, instruction) in script.instructions.iter().enumerate() {
        match instruction.operand {
            BytecodeOperand::Int(offset) if is_branch(instruction.code) => {
                push_target(&mut targets, address, offset);
            }
            BytecodeOperand::Int(table_index) if instruction.code == op::SWITCH.code() => {
                if let Some(table) = script.jump_tables.get(table_index as usize) {
                    for (_, offset) in &table.entries {
                        push_target(&mut targets, address, *offset);
                    }
                }
            }
            _ => {}
        }
    }

    targets
}

fn push_target(targets: &mut Vec<usize>, address: usize, offset: i32) {
    let target = (address as i32 + 1 + offset) as usize;
    if !targets.contains(&target) {
        targets.push(target);
    }
}

fn is_branch(code: u32) -> bool {
    code == op::BRANCH.code()
        || code == op::BRANCH_IF_FALSE.code()
        || code == op::BRANCH_IF_TRUE.code()
}

fn format_instruction(instruction: &BytecodeInstruction, address: usize) -> String {
    let name = mnemonic(instruction.code);

    match &instruction.operand {
        BytecodeOperand::Int(offset) if is_branch(instruction.code) => {
            let target = address as i32 + 1 + offset;
            format!("{:<12}{:+} (→ {:04})", name, offset, target)
        }
        BytecodeOperand::Int(value) => format!("{:<12}{}", name, value),
        BytecodeOperand::Wide(value) => format!("{:<12}{}", name, value),
        BytecodeOperand::Text(value) => format!("{:<12}{:?}", name, value),
    }
}

fn mnemonic(code: u32) -> String {
    let name = match code {
        c if c == op::PUSH_INT.code() => "PUSH_INT",
        c if c == op::PUSH_TEXT.code() => "PUSH_TEXT",
        c if c == op::PUSH_WIDE.code() => "PUSH_WIDE",
        c if c == op::LOAD_INT.code() => "LOAD_INT",
        c if c == op::STORE_INT.code() => "STORE_INT",
        c if c == op::LOAD_TEXT.code() => "LOAD_TEXT",
        c if c == op::STORE_TEXT.code() => "STORE_TEXT",
        c if c == op::LOAD_WIDE.code() => "LOAD_WIDE",
        c if c == op::STORE_WIDE.code() => "STORE_WIDE",
        c if c == op::BRANCH.code() => "BRANCH",
        c if c == op::BRANCH_IF_FALSE.code() => "BRANCH_FALSE",
        c if c == op::BRANCH_IF_TRUE.code() => "BRANCH_TRUE",
        c if c == op::SWITCH.code() => "SWITCH",
        c if c == op::RETURN.code() => "RETURN",
        c if c == op::ADD.code() => "ADD",
        c if c == op::SUB.code() => "SUB",
        c if c == op::MUL.code() => "MUL",
        c if c == op::DIV.code() => "DIV",
        c if c == op::JOIN_TEXT.code() => "JOIN_TEXT",
        other => return format!("OP_{}", other),
    };
    name.to_string()
}
