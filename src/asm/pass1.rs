//! Pass 1 (spec §4.2): assigns addresses, builds the symbol table, and handles the `SET`
//! pseudo-instruction.

use std::collections::HashMap;

use super::error::AssemblerError;
use super::literal::parse_integer;
use super::parser::{parse_line, ParsedLine};

/// A line retained for Pass 2 / the listing, carrying the address it will occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLine {
    pub address: i32,
    pub line_number: usize,
    pub label: Option<String>,
    pub mnemonic: Option<String>,
    pub operand: String,
    pub source: String,
}

#[derive(Debug)]
pub struct Pass1Output {
    pub program: Vec<ProgramLine>,
    pub symbols: HashMap<String, i32>,
}

/// Run Pass 1 over the whole source, line by line.
pub fn run(source: &str) -> Result<Pass1Output, AssemblerError> {
    let mut symbols = HashMap::new();
    let mut program = Vec::new();
    let mut location_counter: i32 = 0;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_number = idx + 1;
        let parsed = parse_line(raw_line);

        if parsed.is_empty() {
            continue;
        }

        if let Some(label) = &parsed.label {
            if symbols.contains_key(label) {
                return Err(AssemblerError::DuplicateLabel { line: line_number, label: label.clone() });
            }
            symbols.insert(label.clone(), location_counter);
        }

        match parsed.mnemonic.as_deref() {
            Some("SET") => {
                handle_set(&parsed, line_number, &mut symbols)?;
            }
            Some(_) => {
                program.push(ProgramLine {
                    address: location_counter,
                    line_number,
                    label: parsed.label.clone(),
                    mnemonic: parsed.mnemonic.clone(),
                    operand: parsed.operand.clone(),
                    source: parsed.source.clone(),
                });
                location_counter += 1;
            }
            None => {
                // Label-only line: retained for the listing, no address slot consumed.
                program.push(ProgramLine {
                    address: location_counter,
                    line_number,
                    label: parsed.label.clone(),
                    mnemonic: None,
                    operand: String::new(),
                    source: parsed.source.clone(),
                });
            }
        }
    }

    Ok(Pass1Output { program, symbols })
}

fn handle_set(
    parsed: &ParsedLine,
    line_number: usize,
    symbols: &mut HashMap<String, i32>,
) -> Result<(), AssemblerError> {
    let label = parsed
        .label
        .as_ref()
        .ok_or(AssemblerError::SetMissingLabel { line: line_number })?;

    // SET operands are numeric literals only -- even one that equals a known label's text.
    let value = parse_integer(&parsed.operand).ok_or_else(|| AssemblerError::SetInvalidOperand {
        line: line_number,
        operand: parsed.operand.clone(),
    })?;

    symbols.insert(label.clone(), value);
    Ok(())
}
