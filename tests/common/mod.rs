//! Common test utilities and assertion helpers.
//!
//! Shared by the integration tests: source sequences and helpers that
//! collect grid groups into plain vectors for comparison.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use seqgrid::{Direction, Expand, Grid, GridOptions};

/// The 26 upper-case letters A to Z.
#[must_use]
pub fn alphabet() -> Vec<char> {
    ('A'..='Z').collect()
}

/// Letters of `row`, by increasing column.
pub fn row_of(grid: &Grid<char>, row: usize) -> String {
    grid.row(row).unwrap().iter().collect()
}

/// Letters of `column`, by increasing row.
pub fn column_of(grid: &Grid<char>, column: usize) -> String {
    grid.column(column).unwrap().iter().collect()
}

/// Every layout the constructor accepts.
pub fn supported_options() -> Vec<GridOptions> {
    vec![
        GridOptions::new(Direction::Horizontal, Expand::Rows),
        GridOptions::new(Direction::Vertical, Expand::Rows),
        GridOptions::new(Direction::Vertical, Expand::Columns),
    ]
}
