// text.rs - Reading and writing boards as whitespace-separated 0/1 tokens
//
//   0 1 1
//   1 0 0
//   0 0 0
//
// Every line with at least one token is a row. Lines without tokens are
// skipped rather than turned into empty rows.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::FormatError;
use crate::grid::Grid;

pub fn parse_grid<R: BufRead>(reader: R) -> Result<Grid, FormatError> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let row = parse_row(&line?, index + 1)?;
        if !row.is_empty() {
            rows.push(row);
        }
    }
    let grid = Grid::new(rows);
    debug!(rows = grid.row_count(), live = grid.live_count(), "parsed board");
    Ok(grid)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>, FormatError> {
    line.split_whitespace()
        .map(|token| parse_cell(token, line_number))
        .collect()
}

fn parse_cell(token: &str, line: usize) -> Result<bool, FormatError> {
    match token.parse::<i64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        Ok(value) => Err(FormatError::InvalidValue { line, value }),
        Err(_) => Err(FormatError::InvalidToken { line, token: token.to_owned() }),
    }
}

pub fn write_grid<W: Write>(grid: &Grid, mut writer: W) -> std::io::Result<()> {
    write!(writer, "{grid}")?;
    writer.flush()
}

/// Writes each cell's live-neighbor count in place of its state.
pub fn write_neighbor_counts<W: Write>(grid: &Grid, mut writer: W) -> std::io::Result<()> {
    for (row, cells) in grid.rows().enumerate() {
        let line: Vec<String> = (0..cells.len())
            .map(|col| grid.neighbors_of_cell(row, col).to_string())
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()
}

impl FromStr for Grid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s.as_bytes())
    }
}
