//! seqgrid - two-dimensional views over a linear sequence
//!
//! Lays an ordered sequence out on a grid and answers row, column and cell
//! lookups with 1-based coordinates:
//! - Vertical (column-major) or horizontal (row-major) filling
//! - Fixed column count, or fixed row count with columns added as needed
//! - Ragged last row/column when the length is not a multiple of the grid size
//! - Deterministic text rendering and a serde snapshot
//!
//! # Usage
//!
//! ```
//! use seqgrid::{Direction, Grid};
//!
//! let grid = Grid::new('A'..='Z', 3, Direction::Horizontal)?;
//! assert_eq!(grid.num_rows(), 9);
//! assert_eq!(grid.row(9)?.to_vec(), vec!['Y', 'Z']);
//! assert_eq!(grid.cell(2, 1)?, &'D');
//! # Ok::<(), seqgrid::GridError>(())
//! ```

pub mod coord;
pub mod error;
pub mod grid;
pub mod layout;

pub use coord::{parse_coord, Coord};
pub use error::{GridError, Result};
pub use grid::{Axis, Cells, Grid, Group, Values};
pub use layout::{Direction, Expand, GridOptions};
