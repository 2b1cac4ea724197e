//! Maze generation settings and the [`generate`] entry point.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use trailblazer_core::{Cell, Dims};

use crate::builder::MazeBuilder;
use crate::error::MazeError;
use crate::maze::Maze;
use crate::prim::PrimStrategy;
use crate::weights::RandomWeights;

/// Spanning-tree algorithm used to carve the maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

/// Settings for [`generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    pub algorithm: MazeAlgorithm,
    /// Only used by [`MazeAlgorithm::Prim`].
    pub prim_strategy: PrimStrategy,
    /// Prim start cell; the grid centre when `None`.
    pub start: Option<Cell>,
    /// Random edge weights are drawn from `[min_weight, max_weight)`.
    pub min_weight: f64,
    pub max_weight: f64,
    /// Seed for reproducible mazes; a fresh thread RNG when `None`.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            algorithm: MazeAlgorithm::Kruskal,
            prim_strategy: PrimStrategy::Frontier,
            start: None,
            min_weight: 0.0,
            max_weight: 100.0,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.cols)
    }

    /// Check the settings before any work is done.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(MazeError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let (low, high) = (self.min_weight, self.max_weight);
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(MazeError::InvalidWeightRange { low, high });
        }
        if let Some(start) = self.start {
            if !self.dims().contains(start) {
                return Err(trailblazer_paths::Error::OutOfBounds {
                    cell: start,
                    dims: self.dims(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Generate a random maze according to `config`.
pub fn generate(config: &MazeConfig) -> Result<Maze, MazeError> {
    config.validate()?;
    match config.seed {
        Some(seed) => build(config, StdRng::seed_from_u64(seed)),
        None => build(config, rand::rng()),
    }
}

fn build<R: Rng>(config: &MazeConfig, rng: R) -> Result<Maze, MazeError> {
    let weights = RandomWeights::new(rng, config.min_weight, config.max_weight)?;
    let mut builder = MazeBuilder::new(weights);
    let dims = config.dims();
    match config.algorithm {
        MazeAlgorithm::Kruskal => builder.kruskal(dims),
        MazeAlgorithm::Prim => {
            let start = config.start.unwrap_or_else(|| dims.center());
            builder.prim(dims, start, config.prim_strategy)
        }
    }
}
