//! Edge weights for maze generation.

use std::collections::HashMap;

use rand::{Rng, RngExt};
use trailblazer_core::{Cell, Dims, Edge};

use crate::error::MazeError;

/// Supplies one weight per candidate edge.
///
/// Builders call [`weight`](Self::weight) exactly once per edge, in
/// [`grid_edges`] order.
pub trait WeightSource {
    fn weight(&mut self, edge: Edge) -> f64;
}

impl<F: FnMut(Edge) -> f64> WeightSource for F {
    #[inline]
    fn weight(&mut self, edge: Edge) -> f64 {
        self(edge)
    }
}

/// Uniformly random weights in `[low, high)`.
pub struct RandomWeights<R: Rng> {
    pub rng: R,
    low: f64,
    high: f64,
}

impl<R: Rng> RandomWeights<R> {
    /// Create a source drawing from `[low, high)`.
    pub fn new(rng: R, low: f64, high: f64) -> Result<Self, MazeError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(MazeError::InvalidWeightRange { low, high });
        }
        Ok(Self { rng, low, high })
    }
}

impl<R: Rng> WeightSource for RandomWeights<R> {
    fn weight(&mut self, _edge: Edge) -> f64 {
        self.rng.random_range(self.low..self.high)
    }
}

/// Every edge of a `dims` grid, each exactly once.
///
/// Horizontal edges come first, row by row from left to right, followed by
/// vertical edges, column by column from top to bottom.
pub fn grid_edges(dims: Dims) -> impl Iterator<Item = Edge> {
    let horizontal = (0..dims.rows)
        .flat_map(move |row| (0..dims.cols - 1).map(move |col| Edge::horizontal(Cell::new(row, col))));
    let vertical = (0..dims.cols)
        .flat_map(move |col| (0..dims.rows - 1).map(move |row| Edge::vertical(Cell::new(row, col))));
    horizontal.chain(vertical)
}

/// The weight recorded for every edge of a grid.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeights {
    order: Vec<Edge>,
    weights: HashMap<Edge, f64>,
}

impl EdgeWeights {
    /// Ask `source` for the weight of every edge in `dims`.
    pub fn record<W: WeightSource + ?Sized>(dims: Dims, source: &mut W) -> Self {
        let mut ew = Self::default();
        for edge in grid_edges(dims) {
            ew.insert(edge, source.weight(edge));
        }
        ew
    }

    /// Record (or overwrite) one edge weight.
    pub fn insert(&mut self, edge: Edge, weight: f64) {
        if self.weights.insert(edge, weight).is_none() {
            self.order.push(edge);
        }
    }

    /// Weight of `edge`, if recorded.
    #[inline]
    pub fn get(&self, edge: Edge) -> Option<f64> {
        self.weights.get(&edge).copied()
    }

    /// Number of recorded edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no edge has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(edge, weight)` pairs in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        self.order.iter().map(|&e| (e, self.weights[&e]))
    }
}
