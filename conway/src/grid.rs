// grid.rs - Ragged grid type for Conway's Game of Life
//
// Rows may differ in length. A grid is never mutated once built; every
// generation step allocates a fresh grid with the same shape.

use std::fmt;

use tracing::debug;

use crate::error::GridError;
use crate::rules::next_state;

/// (dy, dx) offsets of the eight neighbors: orthogonal first, then diagonal.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

pub type TRow = Box<[bool]>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<TRow>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        rows.into_iter().collect()
    }

    fn from_rows(rows: Vec<TRow>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|cells| cells.len())
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.rows.get(row).map(|cells| &cells[..])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.rows.iter().map(|cells| &cells[..])
    }

    /// Length of every row, in row order.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(|cells| cells.len()).collect()
    }

    pub fn live_count(&self) -> usize {
        self.rows.iter().flat_map(|cells| cells.iter()).filter(|&&alive| alive).count()
    }

    /// Cell state at (row, col), or `None` when the coordinate lies outside
    /// the grid. Each row is bounds-checked against its own length.
    pub fn cell(&self, row: isize, col: isize) -> Option<bool> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    pub fn within_bounds(&self, row: isize, col: isize) -> bool {
        self.cell(row, col).is_some()
    }

    /// Checked query. Asking for a cell that does not exist is a caller
    /// error and is reported as [`GridError::OutOfBounds`].
    pub fn is_alive(&self, row: isize, col: isize) -> Result<bool, GridError> {
        self.cell(row, col).ok_or(GridError::OutOfBounds { row, col })
    }

    /// Live cells among the eight neighbors of (row, col). The coordinate
    /// itself need not exist; neighbors outside the grid count as dead.
    pub fn number_of_neighbors(&self, row: isize, col: isize) -> u8 {
        let mut count = 0;
        for &(dy, dx) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add(dy), col.checked_add(dx)) else {
                continue;
            };
            if self.cell(nr, nc) == Some(true) { count += 1; }
        }
        count
    }

    /// Neighbor count addressed by unsigned row/column indices, as produced
    /// by iterating the stored rows.
    pub fn neighbors_of_cell(&self, row: usize, col: usize) -> u8 {
        match (isize::try_from(row), isize::try_from(col)) {
            (Ok(row), Ok(col)) => self.number_of_neighbors(row, col),
            // Past isize::MAX every neighbor is outside any grid.
            _ => 0,
        }
    }

    fn step_row(&self, row: usize, cells: &[bool]) -> TRow {
        cells
            .iter()
            .enumerate()
            .map(|(col, &alive)| next_state(alive, self.neighbors_of_cell(row, col)))
            .collect()
    }

    /// One row of the next generation, computed from this grid.
    pub fn next_row(&self, row: usize) -> Option<TRow> {
        self.rows.get(row).map(|cells| self.step_row(row, cells))
    }

    /// Applies the rule to every cell at once and returns the resulting grid.
    /// `self` is left untouched and the result has the same shape.
    pub fn next_generation(&self) -> Grid {
        let next: Grid = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| self.step_row(row, cells))
            .collect();
        debug!(
            rows = next.row_count(),
            live_before = self.live_count(),
            live_after = next.live_count(),
            "computed next generation"
        );
        next
    }
}

impl FromIterator<Vec<bool>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<bool>>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().map(Vec::into_boxed_slice).collect())
    }
}

impl FromIterator<TRow> for Grid {
    fn from_iter<I: IntoIterator<Item = TRow>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

/// Renders the board as `0`/`1` tokens separated by single spaces, one
/// newline-terminated line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.rows {
            for (col, &alive) in cells.iter().enumerate() {
                if col > 0 { f.write_str(" ")?; }
                f.write_str(if alive { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
