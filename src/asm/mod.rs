//! The two-pass assembler: source text -> Pass 1 (addresses, symbol table) -> Pass 2
//! (operand resolution, encoding, listing) -> object words.

pub mod error;
pub mod literal;
pub mod parser;
pub mod pass1;
pub mod pass2;

pub use error::AssemblerError;

/// Assemble a complete source file into object words and listing text.
pub fn assemble(source: &str) -> Result<pass2::Pass2Output, AssemblerError> {
    log::info!("starting pass 1");
    let p1 = pass1::run(source)?;
    log::info!("pass 1 complete: {} symbols, {} retained lines", p1.symbols.len(), p1.program.len());

    log::info!("starting pass 2");
    let p2 = pass2::run(&p1.program, &p1.symbols)?;
    log::info!("pass 2 complete: {} words emitted", p2.words.len());

    Ok(p2)
}
