//! The [`Edge`] type: an undirected link between two adjacent cells.

use std::fmt;

use crate::geom::Cell;

/// An unordered pair of orthogonally adjacent cells.
///
/// Edges are stored canonically with the smaller endpoint (row-major order)
/// first, so `Edge::new(a, b) == Edge::new(b, a)` and both hash alike.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    start: Cell,
    end: Cell,
}

impl Edge {
    /// Create the edge between `a` and `b`.
    ///
    /// Returns `None` if the cells are equal or not orthogonally adjacent.
    pub fn new(a: Cell, b: Cell) -> Option<Self> {
        if !a.is_adjacent(b) {
            return None;
        }
        Some(Self::canonical(a, b))
    }

    /// The edge between `c` and the cell to its right.
    #[inline]
    pub const fn horizontal(c: Cell) -> Self {
        Self {
            start: c,
            end: c.shift(0, 1),
        }
    }

    /// The edge between `c` and the cell below it.
    #[inline]
    pub const fn vertical(c: Cell) -> Self {
        Self {
            start: c,
            end: c.shift(1, 0),
        }
    }

    #[inline]
    fn canonical(a: Cell, b: Cell) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn start(self) -> Cell {
        self.start
    }

    /// The larger endpoint.
    #[inline]
    pub fn end(self) -> Cell {
        self.end
    }

    /// Both endpoints, smaller first.
    #[inline]
    pub fn cells(self) -> (Cell, Cell) {
        (self.start, self.end)
    }

    /// Whether `c` is one of the endpoints.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        self.start == c || self.end == c
    }

    /// The endpoint opposite `c`, or `None` if `c` is not on this edge.
    #[inline]
    pub fn other(self, c: Cell) -> Option<Cell> {
        if c == self.start {
            Some(self.end)
        } else if c == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Whether both endpoints share a row.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.start.row == self.end.row
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Edge {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: Cell,
            end: Cell,
        }
        let raw = Raw::deserialize(deserializer)?;
        Edge::new(raw.start, raw.end).ok_or_else(|| {
            serde::de::Error::custom(format_args!(
                "cells {} and {} are not adjacent",
                raw.start, raw.end
            ))
        })
    }
}
