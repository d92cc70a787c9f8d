// echo_board.rs - Round-trip check for the board reader and writer

use std::io;

use anyhow::Result;
use clap::Parser;

/// Reads a board from stdin and writes it back unchanged.
#[derive(Parser)]
#[command(name = "echo_board", version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    conway_cli::init_logging();

    conway_cli::run_echo_board(io::stdin().lock(), io::stdout().lock())
}
