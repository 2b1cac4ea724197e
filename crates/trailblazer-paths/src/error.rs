use std::fmt;

use trailblazer_core::{Cell, Dims};

/// Errors returned by the search and data-structure operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A cell lies outside the grid an operation was configured for.
    OutOfBounds { cell: Cell, dims: Dims },
    /// A flat index lies outside a [`DisjointSet`](crate::DisjointSet) universe.
    IndexOutOfBounds { index: usize, len: usize },
    /// Dequeue from an empty priority queue.
    QueueEmpty,
    /// Enqueue of an element that is already queued.
    DuplicateEntry,
    /// Decrease-key of an element that is not queued.
    MissingEntry,
    /// The search frontier ran out before the goal was reached.
    NoPath { start: Cell, end: Cell },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, dims } => {
                write!(f, "cell {cell} is outside the {dims} grid")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is outside a universe of {len} elements")
            }
            Self::QueueEmpty => write!(f, "priority queue is empty"),
            Self::DuplicateEntry => write!(f, "element is already in the priority queue"),
            Self::MissingEntry => write!(f, "element is not in the priority queue"),
            Self::NoPath { start, end } => write!(f, "no path from {start} to {end}"),
        }
    }
}

impl std::error::Error for Error {}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
