//! Pass 2 (spec §4.3): resolves operands, encodes each retained line to a 32-bit word,
//! and produces the object words and listing text.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::isa::{self, DATA_OPCODE, OPERAND_MAX, OPERAND_MIN};

use super::error::AssemblerError;
use super::literal::parse_integer;
use super::pass1::ProgramLine;

#[derive(Debug)]
pub struct Pass2Output {
    pub words: Vec<i32>,
    pub listing: String,
}

/// Run Pass 2 over Pass 1's retained lines and symbol table.
pub fn run(program: &[ProgramLine], symbols: &HashMap<String, i32>) -> Result<Pass2Output, AssemblerError> {
    let mut words = Vec::new();
    let mut listing = String::new();

    for line in program {
        let Some(mnemonic) = line.mnemonic.as_deref() else {
            // Pure-label line: blank line then "label:" in the listing, nothing emitted.
            if let Some(label) = &line.label {
                let _ = writeln!(listing);
                let _ = writeln!(listing, "{label}:");
            }
            continue;
        };

        let info = isa::lookup(mnemonic)
            .ok_or_else(|| AssemblerError::UnknownInstruction { line: line.line_number, mnemonic: mnemonic.to_string() })?;

        let operand_value = if info.takes_operand {
            if line.operand.is_empty() {
                return Err(AssemblerError::MissingOperand { line: line.line_number, mnemonic: mnemonic.to_string() });
            }
            resolve_operand(&line.operand, line.address, isa::is_branch(mnemonic), symbols)
                .map_err(|_| AssemblerError::InvalidOperand { line: line.line_number, operand: line.operand.clone() })?
        } else {
            if !line.operand.is_empty() {
                return Err(AssemblerError::UnexpectedOperand { line: line.line_number, mnemonic: mnemonic.to_string() });
            }
            0
        };

        if !isa::is_branch(mnemonic)
            && info.opcode != DATA_OPCODE
            && !(OPERAND_MIN..=OPERAND_MAX).contains(&operand_value)
        {
            log::warn!(
                "operand {operand_value} for '{mnemonic}' at address {} out of 24-bit range",
                line.address
            );
        }

        let word = if info.opcode == DATA_OPCODE {
            operand_value
        } else {
            (operand_value << 8) | (info.opcode as i32 & 0xFF)
        };

        words.push(word);
        let _ = writeln!(
            listing,
            "{:08x} {:08x}    {} {}",
            line.address as u32, word as u32, mnemonic, line.operand
        );
    }

    Ok(Pass2Output { words, listing })
}

fn resolve_operand(
    text: &str,
    instruction_address: i32,
    is_branch: bool,
    symbols: &HashMap<String, i32>,
) -> Result<i32, ()> {
    if let Some(&value) = symbols.get(text) {
        if is_branch {
            return Ok(value.wrapping_sub(instruction_address.wrapping_add(1)));
        }
        return Ok(value);
    }

    parse_integer(text).ok_or(())
}
