//! Assembler CLI: translates a symbolic assembly source file into a binary object file
//! and a human-readable listing.

use std::path::PathBuf;

use clap::Parser;
use stackvm::{asm, vm::object, AssemblerError};

#[derive(Parser)]
#[command(name = "asm")]
#[command(about = "Assemble a stackvm source file into an object file and listing")]
struct Cli {
    /// Path to the assembly source file.
    input: PathBuf,
    /// Path to write the binary object file.
    output_obj: PathBuf,
    /// Path to write the human-readable listing file.
    output_lst: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("assembly failed: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&cli.input).map_err(|source| AssemblerError::Io {
        path: cli.input.display().to_string(),
        source,
    })?;

    let output = asm::assemble(&source)?;

    object::write_words(&cli.output_obj, &output.words)?;
    std::fs::write(&cli.output_lst, &output.listing)
        .map_err(|e| format!("could not write listing file: {e}"))?;

    println!(
        "assembly successful: {} words written to {}, listing at {}",
        output.words.len(),
        cli.output_obj.display(),
        cli.output_lst.display()
    );
    Ok(())
}
