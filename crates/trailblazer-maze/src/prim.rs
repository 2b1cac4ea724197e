//! Prim's algorithm: grow one tree from a start cell.
//!
//! Two strategies produce the tree:
//! - [`PrimStrategy::Frontier`] keeps one queue of outside cells keyed by
//!   the cheapest edge reaching them, tightening entries with decrease-key
//!   as the tree grows.
//! - [`PrimStrategy::Rescan`] rebuilds a queue of every edge leaving the
//!   tree before each step ([`PrimFrontier::next_edge`]). Simpler, but
//!   quadratic on large grids.
//!
//! With distinct weights both yield the same (unique) minimum spanning tree.

use std::collections::{BTreeSet, HashMap};

use trailblazer_core::{Cell, Dims, Edge};
use trailblazer_paths::{DisjointSet, Error, IndexedPriorityQueue, Neighbors};

use crate::error::MazeError;
use crate::maze::Maze;
use crate::weights::EdgeWeights;

/// How Prim's algorithm tracks the edges leaving the tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimStrategy {
    /// One persistent queue with decrease-key.
    #[default]
    Frontier,
    /// A fresh queue of all leaving edges for every step.
    Rescan,
}

// ---------------------------------------------------------------------------
// Persistent frontier
// ---------------------------------------------------------------------------

struct Growth<'a> {
    dims: Dims,
    weights: &'a EdgeWeights,
    visited: Vec<bool>,
    frontier: IndexedPriorityQueue<Cell>,
    best: HashMap<Cell, Edge>,
    nb: Neighbors,
}

impl Growth<'_> {
    /// Add `c` to the tree and offer its outside neighbours to the frontier.
    fn absorb(&mut self, c: Cell) -> Result<(), Error> {
        if let Some(i) = self.dims.index(c) {
            self.visited[i] = true;
        }
        let dims = self.dims;
        let visited = &self.visited;
        let outside = self.nb.cardinal(c, |n| {
            dims.index(n).is_some_and(|i| !visited[i])
        });
        for &n in outside {
            let Some(edge) = Edge::new(c, n) else {
                continue;
            };
            let Some(w) = self.weights.get(edge) else {
                continue;
            };
            if self.frontier.contains(&n) {
                if self.frontier.decrease_key(&n, w)? {
                    self.best.insert(n, edge);
                    log::trace!("prim: {n} now reached through {edge} ({w})");
                }
            } else {
                self.frontier.enqueue(n, w)?;
                self.best.insert(n, edge);
            }
        }
        Ok(())
    }
}

/// Grow a spanning tree from `start` with a persistent frontier queue.
pub(crate) fn grow_frontier(
    dims: Dims,
    start: Cell,
    weights: &EdgeWeights,
) -> Result<Maze, MazeError> {
    let mut clusters = DisjointSet::for_dims(dims);
    let mut maze = Maze::new(dims);
    let mut growth = Growth {
        dims,
        weights,
        visited: vec![false; dims.len()],
        frontier: IndexedPriorityQueue::with_capacity(dims.len()),
        best: HashMap::new(),
        nb: Neighbors::new(),
    };
    growth.absorb(start)?;

    loop {
        let cell = match growth.frontier.dequeue_min() {
            Ok((cell, _)) => cell,
            // Frontier exhausted: every reachable cell is in the tree.
            Err(Error::QueueEmpty) => break,
            Err(e) => return Err(e.into()),
        };
        let Some(edge) = growth.best.remove(&cell) else {
            continue;
        };
        let (a, b) = edge.cells();
        if clusters.find(a)? == clusters.find(b)? {
            continue;
        }
        clusters.join(a, b)?;
        maze.insert(edge);
        growth.absorb(cell)?;
    }
    Ok(maze)
}

// ---------------------------------------------------------------------------
// Rescan
// ---------------------------------------------------------------------------

/// Step-wise Prim: picks the next tree edge given the cells visited so far.
pub struct PrimFrontier {
    dims: Dims,
    weights: EdgeWeights,
    clusters: DisjointSet,
}

impl PrimFrontier {
    /// Prepare to grow a tree over `dims` using the recorded `weights`.
    pub fn new(dims: Dims, weights: EdgeWeights) -> Result<Self, MazeError> {
        let mut clusters = DisjointSet::for_dims(dims);
        for (edge, _) in weights.iter() {
            let (a, b) = edge.cells();
            clusters.make_set(a)?;
            clusters.make_set(b)?;
        }
        Ok(Self {
            dims,
            weights,
            clusters,
        })
    }

    /// Pick the cheapest edge joining `visited` to a new cell.
    ///
    /// On success the new endpoint has been added to `visited`. Fails with
    /// [`Error::QueueEmpty`] when no edge leaves the visited region, which
    /// signals that the tree is complete.
    pub fn next_edge(&mut self, visited: &mut BTreeSet<Cell>) -> Result<Edge, Error> {
        let mut candidates = IndexedPriorityQueue::new();
        let mut nb = Neighbors::new();
        let dims = self.dims;

        for &c in visited.iter() {
            let outside = nb.cardinal(c, |n| dims.contains(n) && !visited.contains(&n));
            for &n in outside {
                let Some(edge) = Edge::new(c, n) else {
                    continue;
                };
                if let Some(w) = self.weights.get(edge) {
                    candidates.enqueue(edge, w)?;
                }
            }
        }

        loop {
            let (edge, _) = candidates.dequeue_min()?;
            let (a, b) = edge.cells();
            let fresh = if visited.contains(&a) { b } else { a };
            if self.clusters.find(a)? != self.clusters.find(b)? {
                self.clusters.join(a, b)?;
                visited.insert(fresh);
                return Ok(edge);
            }
        }
    }
}

/// Grow a spanning tree from `start` by rescanning the whole tree boundary
/// for every new edge.
pub(crate) fn grow_rescan(
    dims: Dims,
    start: Cell,
    weights: EdgeWeights,
) -> Result<Maze, MazeError> {
    let mut frontier = PrimFrontier::new(dims, weights)?;
    let mut visited = BTreeSet::from([start]);
    let mut maze = Maze::new(dims);
    loop {
        match frontier.next_edge(&mut visited) {
            Ok(edge) => {
                maze.insert(edge);
            }
            Err(Error::QueueEmpty) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(maze)
}
