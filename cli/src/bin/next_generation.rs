// next_generation.rs - Reads a board from stdin and writes its next generation to stdout

use std::io;

use anyhow::Result;
use clap::Parser;

/// Reads a board from stdin and writes its next generation to stdout.
#[derive(Parser)]
#[command(name = "next_generation", version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    conway_cli::init_logging();

    conway_cli::run_next_generation(io::stdin().lock(), io::stdout().lock())
}
