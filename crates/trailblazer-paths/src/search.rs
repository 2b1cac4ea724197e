//! Dijkstra / A* shortest paths.

use trailblazer_core::{Cell, Dims};

use crate::error::{Error, Result};
use crate::observer::{SearchObserver, Visit};
use crate::queue::IndexedPriorityQueue;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A path found by a search: the cells from start to goal inclusive, and the
/// summed step cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
    cost: f64,
}

impl Path {
    /// Cells in visiting order, start first.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total cost of the path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, including both endpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a path returned by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: f64,
    parent: usize,
    visit: Visit,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            visit: Visit::Unvisited,
        }
    }
}

fn checked_index(dims: Dims, c: Cell) -> Result<usize> {
    dims.index(c)
        .ok_or(Error::OutOfBounds { cell: c, dims })
}

/// Compute the cheapest path from `start` to `end` using A*.
///
/// Cells are finalized in order of `cost so far + estimate`; a finalized
/// cell is never revisited, so step costs must be non-negative and the
/// estimate admissible for the result to be optimal. Every state change is
/// reported to `observer`.
///
/// Fails with [`Error::OutOfBounds`] if either endpoint is outside the grid
/// and with [`Error::NoPath`] if the frontier empties before `end` is
/// finalized.
pub fn astar_path<P, O>(pather: &P, start: Cell, end: Cell, observer: &mut O) -> Result<Path>
where
    P: AstarPather + ?Sized,
    O: SearchObserver + ?Sized,
{
    let dims = pather.dims();
    let start_idx = checked_index(dims, start)?;
    let goal_idx = checked_index(dims, end)?;

    let mut nodes = vec![Node::default(); dims.len()];
    let mut open: IndexedPriorityQueue<usize> = IndexedPriorityQueue::new();

    nodes[start_idx].g = 0.0;
    nodes[start_idx].visit = Visit::Frontier;
    observer.visit(start, Visit::Frontier);
    open.enqueue(start_idx, pather.estimate(start, end))?;

    let mut nbuf = Vec::with_capacity(4);
    let mut finalized = 0usize;

    loop {
        let ci = match open.dequeue_min() {
            Ok((ci, _)) => ci,
            Err(Error::QueueEmpty) => {
                log::debug!("search {start} -> {end}: frontier exhausted after {finalized} cells");
                return Err(Error::NoPath { start, end });
            }
            Err(e) => return Err(e),
        };

        let current = dims.cell(ci);
        nodes[ci].visit = Visit::Finalized;
        observer.visit(current, Visit::Finalized);
        finalized += 1;

        if ci == goal_idx {
            break;
        }

        let current_g = nodes[ci].g;
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            let candidate = current_g + pather.cost(current, np);

            let n = &mut nodes[ni];
            match n.visit {
                Visit::Unvisited => {
                    n.g = candidate;
                    n.parent = ci;
                    n.visit = Visit::Frontier;
                    observer.visit(np, Visit::Frontier);
                    open.enqueue(ni, candidate + pather.estimate(np, end))?;
                }
                Visit::Frontier if candidate < n.g => {
                    n.g = candidate;
                    n.parent = ci;
                    open.decrease_key(&ni, candidate + pather.estimate(np, end))?;
                    log::trace!("search: {np} lowered to {candidate} via {current}");
                }
                _ => {}
            }
        }
    }

    // Reconstruct path.
    let mut cells = Vec::new();
    let mut ci = goal_idx;
    while ci != usize::MAX {
        cells.push(dims.cell(ci));
        ci = nodes[ci].parent;
    }
    cells.reverse();

    let cost = nodes[goal_idx].g;
    log::debug!(
        "search {start} -> {end}: {} steps, cost {cost}, {finalized} cells finalized",
        cells.len() - 1
    );
    Ok(Path { cells, cost })
}

/// Compute the cheapest path from `start` to `end` using Dijkstra's
/// algorithm (A* with a zero estimate).
pub fn dijkstra_path<P, O>(pather: &P, start: Cell, end: Cell, observer: &mut O) -> Result<Path>
where
    P: WeightedPather + ?Sized,
    O: SearchObserver + ?Sized,
{
    astar_path(&Uninformed(pather), start, end, observer)
}

/// Wraps a [`WeightedPather`] with a zero estimate.
struct Uninformed<'a, P: ?Sized>(&'a P);

impl<P: WeightedPather + ?Sized> Pather for Uninformed<'_, P> {
    fn dims(&self) -> Dims {
        self.0.dims()
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        self.0.neighbors(c, buf)
    }
}

impl<P: WeightedPather + ?Sized> WeightedPather for Uninformed<'_, P> {
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        self.0.cost(from, to)
    }
}

impl<P: WeightedPather + ?Sized> AstarPather for Uninformed<'_, P> {
    fn estimate(&self, _from: Cell, _to: Cell) -> f64 {
        0.0
    }
}
