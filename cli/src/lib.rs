// lib.rs - Shared plumbing for the board commands
//
// Each command reads one board, does one thing with it and writes the
// result. The binaries only wire these to stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use conway::{Grid, parse_grid, write_grid, write_neighbor_counts};
use conway_coro::RowScheduler;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr so stdout carries nothing but the board.
/// The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn read_board<R: BufRead>(input: R) -> Result<Grid> {
    let grid = parse_grid(input).context("failed to read board")?;
    info!(rows = grid.row_count(), live = grid.live_count(), "board loaded");
    Ok(grid)
}

pub fn run_next_generation<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let grid = read_board(input)?;
    let scheduler = RowScheduler::new()?;
    let next = scheduler.step(&grid).context("failed to compute next generation")?;
    write_grid(&next, output).context("failed to write board")
}

pub fn run_neighbor_counts<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let grid = read_board(input)?;
    write_neighbor_counts(&grid, output).context("failed to write neighbor counts")
}

pub fn run_echo_board<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let grid = read_board(input)?;
    write_grid(&grid, output).context("failed to write board")
}
