//! 1-based grid coordinates and their textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A (row, column) position, both counted from 1.
///
/// Ordering is row first, then column, which is reading order on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The same position with row and column swapped.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            row: self.column,
            column: self.row,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Parse a coordinate like "(2, 3)", "2,3" or "2 3" into a [`Coord`].
///
/// Zero is accepted here; range checks belong to the grid being queried.
pub fn parse_coord(text: &str) -> Option<Coord> {
    let inner = text.trim();
    let inner = inner
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(inner);

    let (row, column) = match inner.split_once(',') {
        Some(pair) => pair,
        None => inner.trim().split_once(char::is_whitespace)?,
    };

    let row = row.trim().parse().ok()?;
    let column = column.trim().parse().ok()?;
    Some(Coord { row, column })
}

impl FromStr for Coord {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coord(s).ok_or_else(|| GridError::InvalidCoord(s.to_string()))
    }
}
