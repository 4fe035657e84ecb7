//! Grid view over a linear sequence.
//!
//! A [`Grid`] takes ownership of an ordered sequence and assigns every element
//! a 1-based (row, column) coordinate, either row by row (horizontal) or column
//! by column (vertical). The layout is computed once in the constructor; after
//! that the grid only answers lookups, so it can be shared freely between
//! readers.
//!
//! Row and column groups are pre-computed alongside the coordinate map, which
//! keeps [`Grid::row`], [`Grid::column`], [`Grid::rows`] and [`Grid::columns`]
//! allocation-free.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::coord::Coord;
use crate::error::{GridError, Result};
use crate::layout::{Direction, Expand, GridOptions};

/// An immutable two-dimensional view over an ordered sequence of `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    options: GridOptions,
    num_rows: usize,
    num_columns: usize,
    /// Elements in source order
    values: Vec<T>,
    /// `coords[i]` is the position of `values[i]`
    coords: Vec<Coord>,
    lookup: HashMap<Coord, usize>,
    /// Indices into `values`, one bucket per row, ordered by column
    by_row: Vec<Vec<usize>>,
    /// Indices into `values`, one bucket per column, ordered by row
    by_column: Vec<Vec<usize>>,
}

impl<T> Grid<T> {
    /// Lay out `source` on a grid with a fixed number of columns.
    ///
    /// The number of rows follows from the element count.
    ///
    /// # Errors
    /// Returns [`GridError::EmptySource`] if `source` yields nothing and
    /// [`GridError::DimensionTooSmall`] if `columns < 2`.
    pub fn new<I>(source: I, columns: usize, direction: Direction) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_options(source, columns, GridOptions::default().with_direction(direction))
    }

    /// Column-major layout with a fixed number of columns.
    ///
    /// # Errors
    /// See [`Grid::new`].
    pub fn vertical<I>(source: I, columns: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(source, columns, Direction::Vertical)
    }

    /// Row-major layout with a fixed number of columns.
    ///
    /// # Errors
    /// See [`Grid::new`].
    pub fn horizontal<I>(source: I, columns: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(source, columns, Direction::Horizontal)
    }

    /// Column-major layout with a fixed number of rows; columns are added as needed.
    ///
    /// The derived column count may be 1 when `rows` is at least the source
    /// length. Rows past the last element then exist but stay empty, and
    /// [`Grid::render`] drops them along with the other trailing whitespace.
    ///
    /// # Errors
    /// Returns [`GridError::EmptySource`] if `source` yields nothing and
    /// [`GridError::DimensionTooSmall`] if `rows < 2`.
    pub fn with_rows<I>(source: I, rows: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_options(
            source,
            rows,
            GridOptions::new(Direction::Vertical, Expand::Columns),
        )
    }

    /// Lay out `source` according to `options`.
    ///
    /// `n` is the column count when `options.expand` is [`Expand::Rows`] and
    /// the row count when it is [`Expand::Columns`].
    ///
    /// # Errors
    /// - [`GridError::EmptySource`] if `source` yields nothing
    /// - [`GridError::DimensionTooSmall`] if `n < 2`
    /// - [`GridError::UnsupportedLayout`] for horizontal filling with a fixed row count
    pub fn with_options<I>(source: I, n: usize, options: GridOptions) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = source.into_iter().collect();

        if values.is_empty() {
            return Err(GridError::EmptySource {
                param: "source",
                count: values.len(),
            });
        }
        if n < 2 {
            return Err(GridError::DimensionTooSmall {
                param: options.expand.fixed_param(),
                value: n,
            });
        }

        let len = values.len();
        let (coords, num_rows, num_columns) = match (options.direction, options.expand) {
            (Direction::Horizontal, Expand::Rows) => {
                let coords = place_in_lines(len, n);
                let num_rows = coords.last().map_or(1, |last| last.row);
                (coords, num_rows, n)
            }
            (Direction::Vertical, Expand::Rows) => {
                let num_rows = len.div_ceil(n);
                (column_major(len, num_rows), num_rows, n)
            }
            (Direction::Vertical, Expand::Columns) => {
                let coords = column_major(len, n);
                let num_columns = coords.last().map_or(1, |last| last.column);
                (coords, n, num_columns)
            }
            (direction @ Direction::Horizontal, expand @ Expand::Columns) => {
                return Err(GridError::UnsupportedLayout { direction, expand });
            }
        };

        let mut lookup = HashMap::with_capacity(len);
        let mut by_row = vec![Vec::new(); num_rows];
        let mut by_column = vec![Vec::new(); num_columns];
        for (index, &coord) in coords.iter().enumerate() {
            lookup.insert(coord, index);
            // Both fills advance monotonically along rows and columns, so
            // pushing in source order keeps every bucket sorted.
            if let Some(bucket) = by_row.get_mut(coord.row - 1) {
                bucket.push(index);
            }
            if let Some(bucket) = by_column.get_mut(coord.column - 1) {
                bucket.push(index);
            }
        }

        log::debug!(
            "laid out {} elements {} as {} rows x {} columns",
            len,
            options.direction,
            num_rows,
            num_columns
        );

        Ok(Self {
            options,
            num_rows,
            num_columns,
            values,
            coords,
            lookup,
            by_row,
            by_column,
        })
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    #[must_use]
    pub fn expand(&self) -> Expand {
        self.options.expand
    }

    #[must_use]
    pub fn options(&self) -> GridOptions {
        self.options
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Number of populated cells, which is the length of the source sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when `coord` lies inside the grid bounds, populated or not.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        (1..=self.num_rows).contains(&coord.row) && (1..=self.num_columns).contains(&coord.column)
    }

    /// True when `coord` holds a value.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.lookup.contains_key(&coord)
    }

    /// Value at `coord`, or `None` when out of bounds or on the ragged edge.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.lookup.get(&coord).and_then(|&index| self.values.get(index))
    }

    /// Value positioned at (`row`, `column`).
    ///
    /// # Errors
    /// Returns [`GridError::RowOutOfRange`] or [`GridError::ColumnOutOfRange`]
    /// when a coordinate falls outside the grid, checked before any lookup.
    /// Returns [`GridError::NoValue`] for an in-bounds cell on the ragged edge.
    pub fn cell(&self, row: usize, column: usize) -> Result<&T> {
        self.check_row(row)?;
        self.check_column(column)?;
        self.get(Coord::new(row, column))
            .ok_or(GridError::NoValue { row, column })
    }

    /// All values in `row`, by increasing column.
    ///
    /// # Errors
    /// Returns [`GridError::RowOutOfRange`] unless `1 <= row <= num_rows()`.
    pub fn row(&self, row: usize) -> Result<Group<'_, T>> {
        let members = row
            .checked_sub(1)
            .and_then(|index| self.by_row.get(index))
            .ok_or_else(|| self.row_error(row))?;
        Ok(Group::new(self, Axis::Row, row, members))
    }

    /// All values in `column`, by increasing row.
    ///
    /// # Errors
    /// Returns [`GridError::ColumnOutOfRange`] unless `1 <= column <= num_columns()`.
    pub fn column(&self, column: usize) -> Result<Group<'_, T>> {
        let members = column
            .checked_sub(1)
            .and_then(|index| self.by_column.get(index))
            .ok_or_else(|| self.column_error(column))?;
        Ok(Group::new(self, Axis::Column, column, members))
    }

    /// One group per row, from row 1 to `num_rows()`.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Group<'_, T>> + '_ {
        self.by_row
            .iter()
            .enumerate()
            .map(move |(index, members)| Group::new(self, Axis::Row, index + 1, members))
    }

    /// One group per column, from column 1 to `num_columns()`.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Group<'_, T>> + '_ {
        self.by_column
            .iter()
            .enumerate()
            .map(move |(index, members)| Group::new(self, Axis::Column, index + 1, members))
    }

    /// Every populated cell in source order.
    pub fn iter(&self) -> Cells<'_, T> {
        self.coords.iter().copied().zip(self.values.iter())
    }

    /// Position assigned to the element at `index` in the source sequence.
    #[must_use]
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        self.coords.get(index).copied()
    }

    /// The owned elements, in source order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if (1..=self.num_rows).contains(&row) {
            Ok(())
        } else {
            Err(self.row_error(row))
        }
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if (1..=self.num_columns).contains(&column) {
            Ok(())
        } else {
            Err(self.column_error(column))
        }
    }

    fn row_error(&self, row: usize) -> GridError {
        log::trace!("rejected row {} (grid has {} rows)", row, self.num_rows);
        GridError::RowOutOfRange {
            value: row,
            max: self.num_rows,
        }
    }

    fn column_error(&self, column: usize) -> GridError {
        log::trace!(
            "rejected column {} (grid has {} columns)",
            column,
            self.num_columns
        );
        GridError::ColumnOutOfRange {
            value: column,
            max: self.num_columns,
        }
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Multi-line text form of the grid.
    ///
    /// ```text
    /// Direction: Vertical
    /// Number of columns: 2
    /// Number of rows: 2
    /// (1, 1) A	(1, 2) C
    /// (2, 1) B	(2, 2) D
    /// ```
    ///
    /// Cells in a row are separated by a single tab and trailing whitespace
    /// is trimmed from the result.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Direction: {}", self.direction()),
            format!("Number of columns: {}", self.num_columns),
            format!("Number of rows: {}", self.num_rows),
        ];
        lines.extend(self.rows().map(|row| {
            row.cells()
                .map(|(coord, value)| format!("{coord} {value}"))
                .collect::<Vec<_>>()
                .join("\t")
        }));

        let mut out = lines.join("\n");
        out.truncate(out.trim_end().len());
        out
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over every populated cell of a [`Grid`], in source order.
pub type Cells<'a, T> =
    std::iter::Zip<std::iter::Copied<std::slice::Iter<'a, Coord>>, std::slice::Iter<'a, T>>;

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Coord, &'a T);
    type IntoIter = Cells<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter().copied().zip(self.values.iter())
    }
}

#[derive(Serialize)]
struct Snapshot<'a, T> {
    direction: Direction,
    expand: Expand,
    num_columns: usize,
    num_rows: usize,
    cells: Vec<CellEntry<'a, T>>,
}

#[derive(Serialize)]
struct CellEntry<'a, T> {
    row: usize,
    column: usize,
    value: &'a T,
}

/// Serializes the layout with its cells in reading order (row by row).
impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let cells = self
            .rows()
            .flat_map(|row| row.cells())
            .map(|(coord, value)| CellEntry {
                row: coord.row,
                column: coord.column,
                value,
            })
            .collect();

        Snapshot {
            direction: self.direction(),
            expand: self.expand(),
            num_columns: self.num_columns,
            num_rows: self.num_rows,
            cells,
        }
        .serialize(serializer)
    }
}

/// Positions for `len` elements written along lines of `line_len` cells.
///
/// Returned coordinates are (line, offset); a new line starts whenever the
/// offset would pass `line_len`.
fn place_in_lines(len: usize, line_len: usize) -> Vec<Coord> {
    let mut coords = Vec::with_capacity(len);
    let mut line = 1;
    let mut offset = 1;

    for _ in 0..len {
        if offset > line_len {
            offset = 1;
            line += 1;
        }
        coords.push(Coord::new(line, offset));
        offset += 1;
    }

    coords
}

/// Top-to-bottom placement that wraps to the next column after `num_rows`.
fn column_major(len: usize, num_rows: usize) -> Vec<Coord> {
    place_in_lines(len, num_rows)
        .into_iter()
        .map(Coord::transposed)
        .collect()
}

/// Whether a [`Group`] holds a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// The populated cells of one row or column.
///
/// Values are ordered by increasing column (for a row) or increasing row
/// (for a column). Groups on the ragged edge may be shorter than the grid.
pub struct Group<'a, T> {
    grid: &'a Grid<T>,
    axis: Axis,
    key: usize,
    members: &'a [usize],
}

impl<'a, T> Group<'a, T> {
    fn new(grid: &'a Grid<T>, axis: Axis, key: usize, members: &'a [usize]) -> Self {
        Self {
            grid,
            axis,
            key,
            members,
        }
    }

    /// 1-based row or column number this group was taken from.
    #[must_use]
    pub fn key(&self) -> usize {
        self.key
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> Values<'a, T> {
        Values {
            values: &self.grid.values,
            members: self.members.iter(),
        }
    }

    /// Values paired with their coordinates.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = (Coord, &'a T)> + 'a {
        let grid = self.grid;
        self.members.iter().filter_map(move |&index| {
            let coord = grid.coords.get(index).copied()?;
            grid.values.get(index).map(|value| (coord, value))
        })
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a T> {
        self.iter().next()
    }

    #[must_use]
    pub fn last(&self) -> Option<&'a T> {
        self.iter().next_back()
    }
}

impl<T: Clone> Group<'_, T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Group<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Group<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Group<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("axis", &self.axis)
            .field("key", &self.key)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for Group<'a, T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Group<'a, T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`Group`].
pub struct Values<'a, T> {
    values: &'a [T],
    members: std::slice::Iter<'a, usize>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.members.next()?;
        self.values.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.members.size_hint()
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = *self.members.next_back()?;
        self.values.get(index)
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_place_in_lines_wraps() {
        let coords = place_in_lines(5, 2);
        assert_eq!(
            coords,
            vec![
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 2),
                Coord::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_column_major_transposes() {
        let coords = column_major(3, 2);
        assert_eq!(
            coords,
            vec![Coord::new(1, 1), Coord::new(2, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_square_vertical() {
        let grid = Grid::vertical("ABCD".chars(), 2).unwrap();
        assert_eq!(grid.cell(1, 1).unwrap(), &'A');
        assert_eq!(grid.cell(2, 1).unwrap(), &'B');
        assert_eq!(grid.cell(1, 2).unwrap(), &'C');
        assert_eq!(grid.cell(2, 2).unwrap(), &'D');
    }

    #[test]
    fn test_groups_are_sorted() {
        let grid = Grid::vertical(1..=10, 3).unwrap();
        // 4 rows: column 1 = 1..=4, column 2 = 5..=8, column 3 = 9..=10
        assert_eq!(grid.row(1).unwrap().to_vec(), vec![1, 5, 9]);
        assert_eq!(grid.row(3).unwrap().to_vec(), vec![3, 7]);
        assert_eq!(grid.column(3).unwrap().to_vec(), vec![9, 10]);

        let cells: Vec<_> = grid.row(2).unwrap().cells().map(|(c, _)| c).collect();
        assert_eq!(
            cells,
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );
    }

    #[test]
    fn test_group_accessors() {
        let grid = Grid::horizontal(["a", "b", "c"], 2).unwrap();
        let last = grid.row(2).unwrap();
        assert_eq!(last.key(), 2);
        assert_eq!(last.axis(), Axis::Row);
        assert_eq!(last.len(), 1);
        assert_eq!(last.first(), Some(&"c"));
        assert_eq!(last.last(), Some(&"c"));

        let first = grid.row(1).unwrap();
        assert_eq!(first.iter().rev().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_get_and_contains() {
        let grid = Grid::horizontal(0..5, 3).unwrap();
        assert_eq!(grid.get(Coord::new(2, 2)), Some(&4));
        assert_eq!(grid.get(Coord::new(2, 3)), None);
        assert!(grid.in_bounds(Coord::new(2, 3)));
        assert!(!grid.contains(Coord::new(2, 3)));
        assert!(!grid.in_bounds(Coord::new(0, 1)));
        assert_eq!(grid.coord_of(3), Some(Coord::new(2, 1)));
        assert_eq!(grid.coord_of(5), None);
    }

    #[test]
    fn test_zero_coordinates_are_out_of_range() {
        let grid = Grid::vertical(0..4, 2).unwrap();
        assert!(matches!(
            grid.cell(0, 1),
            Err(GridError::RowOutOfRange { value: 0, max: 2 })
        ));
        assert!(matches!(
            grid.cell(1, 0),
            Err(GridError::ColumnOutOfRange { value: 0, max: 2 })
        ));
        assert!(grid.row(0).is_err());
        assert!(grid.column(0).is_err());
    }

    #[test]
    fn test_grid_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Grid<String>>();
    }
}
