use std::fmt;

/// Errors that can occur while building a maze.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The grid has no cells.
    EmptyGrid { rows: i32, cols: i32 },
    /// The weight range is empty or not finite.
    InvalidWeightRange { low: f64, high: f64 },
    /// A union-find or queue operation failed.
    Paths(trailblazer_paths::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "maze: cannot build on an empty {rows}x{cols} grid")
            }
            Self::InvalidWeightRange { low, high } => {
                write!(f, "maze: invalid weight range [{low}, {high})")
            }
            Self::Paths(e) => write!(f, "maze: {e}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Paths(e) => Some(e),
            _ => None,
        }
    }
}

impl From<trailblazer_paths::Error> for MazeError {
    fn from(e: trailblazer_paths::Error) -> Self {
        Self::Paths(e)
    }
}
