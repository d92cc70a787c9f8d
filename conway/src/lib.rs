// lib.rs - Conway's Game of Life on ragged boolean grids

pub mod error;
pub mod grid;
pub mod rules;
pub mod text;

pub use error::{FormatError, GridError};
pub use grid::{Grid, NEIGHBOR_OFFSETS, TRow};
pub use rules::next_state;
pub use text::{parse_grid, write_grid, write_neighbor_counts};
