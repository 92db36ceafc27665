//! Assembler error taxonomy (spec §7).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: duplicate label '{label}'")]
    DuplicateLabel { line: usize, label: String },

    #[error("line {line}: SET requires a label")]
    SetMissingLabel { line: usize },

    #[error("line {line}: invalid SET operand '{operand}' (must be a numeric literal, not a label)")]
    SetInvalidOperand { line: usize, operand: String },

    #[error("line {line}: unknown instruction '{mnemonic}'")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("line {line}: missing operand for '{mnemonic}'")]
    MissingOperand { line: usize, mnemonic: String },

    #[error("line {line}: unexpected operand for '{mnemonic}'")]
    UnexpectedOperand { line: usize, mnemonic: String },

    #[error("line {line}: no such label or invalid operand '{operand}'")]
    InvalidOperand { line: usize, operand: String },
}
