// neighbor_counts.rs - Diagnostic dump of live-neighbor counts

use std::io;

use anyhow::Result;
use clap::Parser;

/// Reads a board from stdin and writes each cell's live-neighbor count.
#[derive(Parser)]
#[command(name = "neighbor_counts", version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    conway_cli::init_logging();

    conway_cli::run_neighbor_counts(io::stdin().lock(), io::stdout().lock())
}
