//! Geometry primitives: [`Cell`] and [`Dims`].
//!
//! Cells are addressed as `(row, col)`, zero-based, with rows growing down.
//! Coordinates are signed so that neighbour arithmetic may step off the grid;
//! such cells are rejected by [`Dims::contains`].

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid position. Ordered row-major: by row, then by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (up, right, down, left).
    ///
    /// Some of them may lie outside any particular grid.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }

    /// Whether `other` is one orthogonal step away from `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions: `rows × cols` cells starting at (0, 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    /// Create new dimensions. Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if outside the grid.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index). The index is not range-checked.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The centre cell, `(rows / 2, cols / 2)`.
    #[inline]
    pub fn center(self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            cur: Cell::ZERO,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Cell;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dims {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            rows: i32,
            cols: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Dims::new(raw.rows, raw.cols))
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    cur: Cell,
}

impl Iterator for DimsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.dims.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return (0, Some(0));
        }
        let remaining_in_row = (self.dims.cols - self.cur.col) as usize;
        let remaining_rows = (self.dims.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.dims.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for DimsIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn dims_round_trip() {
        let d = Dims::new(4, 9);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(serde_json::from_str::<Dims>(&json).unwrap(), d);
    }

    #[test]
    fn negative_dims_are_clamped() {
        let d: Dims = serde_json::from_str(r#"{"rows":-3,"cols":5}"#).unwrap();
        assert_eq!(d, Dims::new(0, 5));
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }
}
