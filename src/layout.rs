//! Layout options: fill direction and which dimension grows.
//!
//! Both enums are closed, so an unrecognized option can only arrive as text.
//! Parsing from a string (directly or through serde) is where such values are
//! rejected with [`GridError::InvalidOption`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Order in which source elements are placed onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    /// Row-major: left to right, then onto the next row.
    Horizontal,
    /// Column-major: top to bottom, then onto the next column (default).
    #[default]
    Vertical,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "row-major" | "rowmajor" => Ok(Self::Horizontal),
            "vertical" | "column-major" | "columnmajor" => Ok(Self::Vertical),
            _ => Err(GridError::InvalidOption {
                param: "direction",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which dimension grows while the other stays at the caller's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Expand {
    /// The caller fixes the column count; rows are added as needed (default).
    #[default]
    Rows,
    /// The caller fixes the row count; columns are added as needed.
    Columns,
}

impl Expand {
    pub const ALL: [Self; 2] = [Self::Rows, Self::Columns];

    /// Name of the dimension the caller supplies, used in error reports.
    #[must_use]
    pub fn fixed_param(self) -> &'static str {
        match self {
            Self::Rows => "columns",
            Self::Columns => "rows",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
        }
    }
}

impl fmt::Display for Expand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expand {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" | "fix-columns" => Ok(Self::Rows),
            "columns" | "fix-rows" => Ok(Self::Columns),
            _ => Err(GridError::InvalidOption {
                param: "expand",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Expand {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Layout configuration passed to [`Grid::with_options`](crate::Grid::with_options).
///
/// Missing fields fall back to their defaults when deserialized, so
/// `{"direction": "horizontal"}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub direction: Direction,
    pub expand: Expand,
}

impl GridOptions {
    #[must_use]
    pub fn new(direction: Direction, expand: Expand) -> Self {
        Self { direction, expand }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_expand(mut self, expand: Expand) -> Self {
        self.expand = expand;
        self
    }

    /// Parse options from a JSON object such as `{"direction":"horizontal"}`.
    ///
    /// # Errors
    /// Returns [`GridError::Json`] for malformed JSON or unknown option names.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
