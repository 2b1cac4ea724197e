//! Maze builders over a [`WeightSource`].

use trailblazer_core::{Cell, Dims};
use trailblazer_paths::{DisjointSet, Error, IndexedPriorityQueue};

use crate::error::MazeError;
use crate::maze::Maze;
use crate::prim::{self, PrimStrategy};
use crate::weights::{EdgeWeights, WeightSource};

/// Builds spanning-tree mazes, drawing edge weights from `weights`.
pub struct MazeBuilder<W: WeightSource> {
    pub weights: W,
}

impl<W: WeightSource> MazeBuilder<W> {
    /// Create a builder drawing weights from `weights`.
    pub fn new(weights: W) -> Self {
        Self { weights }
    }

    /// Weigh every edge of `dims`.
    fn record(&mut self, dims: Dims) -> Result<EdgeWeights, MazeError> {
        if dims.is_empty() {
            return Err(MazeError::EmptyGrid {
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        Ok(EdgeWeights::record(dims, &mut self.weights))
    }

    /// Generate a maze with Kruskal's algorithm.
    ///
    /// Every edge is queued by weight; edges are then taken cheapest first
    /// and kept whenever they join two separate regions.
    pub fn kruskal(&mut self, dims: Dims) -> Result<Maze, MazeError> {
        let weights = self.record(dims)?;

        let mut clusters = DisjointSet::for_dims(dims);
        for c in dims {
            clusters.make_set(c)?;
        }
        let mut queue = IndexedPriorityQueue::with_capacity(weights.len());
        for (edge, w) in weights.iter() {
            queue.enqueue(edge, w)?;
        }

        let mut maze = Maze::new(dims);
        let mut rejected = 0usize;
        while !queue.is_empty() {
            let (edge, w) = queue.dequeue_min()?;
            let (a, b) = edge.cells();
            if clusters.find(a)? != clusters.find(b)? {
                clusters.join(a, b)?;
                maze.insert(edge);
                log::trace!("kruskal: accepted {edge} ({w})");
            } else {
                rejected += 1;
            }
        }

        log::debug!(
            "kruskal {dims}: {} edges accepted, {rejected} rejected",
            maze.len()
        );
        Ok(maze)
    }

    /// Generate a maze with Prim's algorithm, growing from `start`.
    pub fn prim(
        &mut self,
        dims: Dims,
        start: Cell,
        strategy: PrimStrategy,
    ) -> Result<Maze, MazeError> {
        if !dims.contains(start) && !dims.is_empty() {
            return Err(Error::OutOfBounds { cell: start, dims }.into());
        }
        let weights = self.record(dims)?;

        let maze = match strategy {
            PrimStrategy::Frontier => prim::grow_frontier(dims, start, &weights)?,
            PrimStrategy::Rescan => prim::grow_rescan(dims, start, weights)?,
        };

        log::debug!(
            "prim {dims} from {start} ({strategy:?}): {} edges accepted",
            maze.len()
        );
        Ok(maze)
    }
}
