//! Emulator CLI: loads a binary object file and executes it against a flat
//! word-addressed memory.

use std::path::PathBuf;

use clap::Parser;
use stackvm::vm::object;
use stackvm::vm::Memory;
use stackvm::Vm;

#[derive(Parser)]
#[command(name = "vm")]
#[command(about = "Run a stackvm object file")]
struct Cli {
    /// Path to the binary object file.
    input: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let words = object::read_words(&cli.input)?;
    log::info!("loaded {} words into memory", words.len());

    let mut memory = Memory::new();
    memory.load(&words);
    let mut vm = Vm::with_memory(memory);

    println!("--- Running Program ---");
    vm.run()?;
    println!("--- Program Halted ---");
    println!("Registers:");
    println!("{}", vm.regs);

    Ok(())
}
