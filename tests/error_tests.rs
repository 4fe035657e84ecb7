//! Validation tests for seqgrid
//!
//! Construction rejects empty sources and undersized dimensions before any
//! layout work; queries reject coordinates outside the grid.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{alphabet, supported_options};
use seqgrid::{Coord, Direction, Expand, Grid, GridError, GridOptions};
use test_case::test_case;

#[test]
fn test_empty_source_is_rejected() {
    for options in supported_options() {
        let err = Grid::with_options(Vec::<char>::new(), 3, options).unwrap_err();
        assert!(matches!(
            err,
            GridError::EmptySource {
                param: "source",
                count: 0
            }
        ));
        assert!(err.is_out_of_range());
    }

    let err = Grid::vertical(std::iter::empty::<char>(), 3).unwrap_err();
    assert_eq!(
        err.to_string(),
        "source must contain at least one element (parameter 'source', actual value 0)"
    );
}

#[test]
fn test_empty_source_is_checked_before_dimension() {
    let err = Grid::vertical(Vec::<char>::new(), 1).unwrap_err();
    assert!(matches!(err, GridError::EmptySource { .. }));
}

#[test_case(Expand::Rows, 1, "columns" ; "one column")]
#[test_case(Expand::Rows, 0, "columns" ; "zero columns")]
#[test_case(Expand::Columns, 1, "rows" ; "one row")]
#[test_case(Expand::Columns, 0, "rows" ; "zero rows")]
fn test_dimension_too_small(expand: Expand, n: usize, param: &str) {
    let options = GridOptions::default().with_expand(expand);
    let err = Grid::with_options(alphabet(), n, options).unwrap_err();

    match &err {
        GridError::DimensionTooSmall { param: p, value } => {
            assert_eq!(*p, param);
            assert_eq!(*value, n);
        }
        other => panic!("expected DimensionTooSmall, got {other:?}"),
    }
    assert_eq!(err.param(), Some(param));
    assert!(err.is_out_of_range());
}

#[test]
fn test_dimension_checked_for_every_expand() {
    for expand in Expand::ALL {
        let options = GridOptions::default().with_expand(expand);
        for n in 0..2 {
            let err = Grid::with_options(alphabet(), n, options).unwrap_err();
            assert_eq!(err.param(), Some(expand.fixed_param()));
            assert!(matches!(err, GridError::DimensionTooSmall { value, .. } if value == n));
        }
        assert!(Grid::with_options(alphabet(), 2, options).is_ok());
    }
}

#[test]
fn test_dimension_message() {
    let err = Grid::horizontal(alphabet(), 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "columns must be > 1 (parameter 'columns', actual value 1)"
    );
}

#[test]
fn test_dimension_checked_before_layout_support() {
    let options = GridOptions::new(Direction::Horizontal, Expand::Columns);
    let err = Grid::with_options(alphabet(), 1, options).unwrap_err();
    assert!(matches!(err, GridError::DimensionTooSmall { param: "rows", .. }));
}

#[test_case("diagonal", "direction" ; "unknown direction")]
#[test_case("", "direction" ; "empty direction")]
fn test_unknown_direction(text: &str, param: &str) {
    let err = text.parse::<Direction>().unwrap_err();
    assert!(matches!(err, GridError::InvalidOption { .. }));
    assert_eq!(err.param(), Some(param));
    assert!(err.is_out_of_range());
}

#[test]
fn test_unknown_option_in_json() {
    let err = GridOptions::from_json(r#"{"expand":"sideways"}"#).unwrap_err();
    assert!(matches!(err, GridError::Json(_)));
    assert!(err.to_string().contains("invalid expand"));
}

#[test]
fn test_row_out_of_range() {
    let grid = Grid::horizontal(alphabet(), 3).unwrap();

    let err = grid.cell(10, 1).unwrap_err();
    assert!(matches!(err, GridError::RowOutOfRange { value: 10, max: 9 }));
    assert_eq!(
        err.to_string(),
        "invalid row (parameter 'row', actual value 10, expected 1..=9)"
    );

    assert!(matches!(
        grid.row(0),
        Err(GridError::RowOutOfRange { value: 0, max: 9 })
    ));
}

#[test]
fn test_column_out_of_range() {
    let grid = Grid::horizontal(alphabet(), 3).unwrap();

    let err = grid.cell(1, 4).unwrap_err();
    assert!(matches!(err, GridError::ColumnOutOfRange { value: 4, max: 3 }));
    assert_eq!(err.param(), Some("column"));

    assert!(matches!(
        grid.column(4),
        Err(GridError::ColumnOutOfRange { value: 4, max: 3 })
    ));
}

#[test]
fn test_range_checked_before_lookup() {
    // (9, 3) is on the ragged edge, (10, 3) is past it
    let grid = Grid::horizontal(alphabet(), 3).unwrap();
    assert!(matches!(grid.cell(9, 3), Err(GridError::NoValue { .. })));
    assert!(matches!(
        grid.cell(10, 3),
        Err(GridError::RowOutOfRange { .. })
    ));
    assert!(matches!(
        grid.cell(10, 4),
        Err(GridError::RowOutOfRange { .. })
    ));
}

#[test]
fn test_coordinate_text() {
    let coord: Coord = "(9, 2)".parse().unwrap();
    let grid = Grid::horizontal(alphabet(), 3).unwrap();
    assert_eq!(grid.cell(coord.row, coord.column).unwrap(), &'Z');

    let err = "nine,two".parse::<Coord>().unwrap_err();
    assert!(matches!(err, GridError::InvalidCoord(_)));
}
