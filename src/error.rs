//! Structured error types for seqgrid.
//!
//! Every failure is reported synchronously at the violated precondition.
//! Construction either fails here or the layout succeeds in full.

use crate::layout::{Direction, Expand};

/// All errors that can occur while building or querying a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The source sequence had no elements.
    #[error("{param} must contain at least one element (parameter '{param}', actual value {count})")]
    EmptySource { param: &'static str, count: usize },

    /// The governing dimension was smaller than two.
    #[error("{param} must be > 1 (parameter '{param}', actual value {value})")]
    DimensionTooSmall { param: &'static str, value: usize },

    /// A direction or expand name that is not one of the recognized options.
    #[error("invalid {param} (parameter '{param}', actual value '{value}')")]
    InvalidOption { param: &'static str, value: String },

    #[error("invalid row (parameter 'row', actual value {value}, expected 1..={max})")]
    RowOutOfRange { value: usize, max: usize },

    #[error("invalid column (parameter 'column', actual value {value}, expected 1..={max})")]
    ColumnOutOfRange { value: usize, max: usize },

    /// The coordinate is inside the grid bounds but sits on the ragged edge.
    #[error("cell ({row}, {column}) contains no value")]
    NoValue { row: usize, column: usize },

    /// Horizontal filling wraps on the column count, so it cannot grow columns.
    #[error("{direction} layout cannot grow {expand}: supply a column count instead")]
    UnsupportedLayout { direction: Direction, expand: Expand },

    /// Text that does not describe a `(row, column)` pair.
    #[error("invalid coordinate: {0}")]
    InvalidCoord(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// True for every error that reports an argument outside its accepted range.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::EmptySource { .. }
                | Self::DimensionTooSmall { .. }
                | Self::InvalidOption { .. }
                | Self::RowOutOfRange { .. }
                | Self::ColumnOutOfRange { .. }
        )
    }

    /// Name of the offending parameter, when the error is tied to one.
    #[must_use]
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::EmptySource { param, .. }
            | Self::DimensionTooSmall { param, .. }
            | Self::InvalidOption { param, .. } => Some(*param),
            Self::RowOutOfRange { .. } => Some("row"),
            Self::ColumnOutOfRange { .. } => Some("column"),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_parameter_and_value() {
        let err = GridError::EmptySource {
            param: "source",
            count: 0,
        };
        assert_eq!(
            err.to_string(),
            "source must contain at least one element (parameter 'source', actual value 0)"
        );

        let err = GridError::DimensionTooSmall {
            param: "columns",
            value: 1,
        };
        assert_eq!(
            err.to_string(),
            "columns must be > 1 (parameter 'columns', actual value 1)"
        );
    }

    #[test]
    fn test_out_of_range_grouping() {
        assert!(GridError::RowOutOfRange { value: 0, max: 3 }.is_out_of_range());
        assert!(GridError::InvalidOption {
            param: "direction",
            value: "diagonal".to_string()
        }
        .is_out_of_range());
        assert!(!GridError::NoValue { row: 7, column: 3 }.is_out_of_range());
        assert!(!GridError::InvalidCoord("x".to_string()).is_out_of_range());
    }

    #[test]
    fn test_param_names() {
        assert_eq!(
            GridError::ColumnOutOfRange { value: 9, max: 3 }.param(),
            Some("column")
        );
        assert_eq!(GridError::NoValue { row: 1, column: 1 }.param(), None);
    }
}
