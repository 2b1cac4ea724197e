//! Perfect maze generation for trailblazer.
//!
//! A maze is a spanning tree over every cell of a grid: exactly one route
//! joins any two cells. Two generators are provided:
//! - **Kruskal**: accept the globally cheapest edges that join two
//!   separate regions.
//! - **Prim**: grow one region from a start cell, always through the
//!   cheapest edge leaving it.
//!
//! Edge weights come from a [`WeightSource`]; with random weights the
//! result is a random maze.

pub mod builder;
pub mod config;
pub mod error;
pub mod maze;
pub mod prim;
pub mod weights;

pub use builder::MazeBuilder;
pub use config::{MazeAlgorithm, MazeConfig, generate};
pub use error::MazeError;
pub use maze::Maze;
pub use prim::{PrimFrontier, PrimStrategy};
pub use weights::{EdgeWeights, RandomWeights, WeightSource, grid_edges};
