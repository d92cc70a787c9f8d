// lib.rs - Generation step with one coroutine per row
//
// Every row of the next generation depends only on the previous (shared,
// read-only) grid, so each row is computed by its own tokio task and the
// finished rows are put back together by index.

use std::sync::Arc;

use conway::{Grid, TRow, next_state};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum CoroError {
    #[error("failed to start tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("row task failed: {0}")]
    RowTask(#[from] JoinError),

    #[error("row {0} is not part of the grid")]
    MissingRow(usize),
}

/// Row coroutine that computes the next state of every cell in one row.
/// Returns `None` for a row index the grid does not have, like
/// [`Grid::next_row`].
pub async fn process_row(row_index: usize, current_grid: Arc<Grid>) -> Option<(usize, TRow)> {
    let cells = current_grid.row(row_index)?;
    let mut row_result = Vec::with_capacity(cells.len());
    for (col, &alive) in cells.iter().enumerate() {
        let count = current_grid.neighbors_of_cell(row_index, col);
        row_result.push(next_state(alive, count));

        tokio::task::yield_now().await;  // Cooperative yielding
    }
    trace!(row = row_index, cells = row_result.len(), "row finished");
    Some((row_index, row_result.into_boxed_slice()))  // Return (row_id, completed_row)
}

/// Spawns every row coroutine at once and collects the completed rows.
pub async fn next_generation(current_grid: Arc<Grid>) -> Result<Grid, CoroError> {
    let row_count = current_grid.row_count();
    let handles: Vec<_> = (0..row_count)
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&current_grid))))
        .collect();

    let mut next_rows: Vec<TRow> = vec![Box::default(); row_count];
    for (row, handle) in handles.into_iter().enumerate() {
        let (row_index, completed_row) = handle.await?.ok_or(CoroError::MissingRow(row))?;
        next_rows[row_index] = completed_row;
    }

    let next: Grid = next_rows.into_iter().collect();
    debug!(rows = row_count, live = next.live_count(), "row coroutines finished");
    Ok(next)
}

/// Owns the runtime the row coroutines are scheduled on, for synchronous
/// callers.
pub struct RowScheduler {
    runtime: tokio::runtime::Runtime,
}

impl RowScheduler {
    pub fn new() -> Result<Self, CoroError> {
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self { runtime })
    }

    pub fn step(&self, grid: &Grid) -> Result<Grid, CoroError> {
        // Tasks must be 'static, so the row coroutines share a copy.
        let shared = Arc::new(grid.clone());
        self.runtime.block_on(next_generation(shared))
    }
}
