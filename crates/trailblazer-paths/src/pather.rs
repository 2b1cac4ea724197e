use trailblazer_core::{Cell, Dims, World};

use crate::costs;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Signature shared by cost functions and heuristics over a [`World`].
pub type WorldFn = fn(Cell, Cell, &World) -> f64;

/// Adapts a [`World`] and plain cost / heuristic functions to the pather
/// traits.
///
/// The cost function is called as `cost(from, to, world)` for every pair of
/// orthogonally adjacent in-bounds cells; the heuristic as
/// `heuristic(cell, goal, world)`.
pub struct WorldPather<'w, C, H = WorldFn> {
    world: &'w World,
    cost: C,
    heuristic: H,
}

impl<'w, C> WorldPather<'w, C>
where
    C: Fn(Cell, Cell, &World) -> f64,
{
    /// Pather with a zero heuristic (plain Dijkstra when used with A*).
    pub fn new(world: &'w World, cost: C) -> Self {
        Self {
            world,
            cost,
            heuristic: costs::zero_heuristic,
        }
    }
}

impl<'w, C, H> WorldPather<'w, C, H>
where
    C: Fn(Cell, Cell, &World) -> f64,
    H: Fn(Cell, Cell, &World) -> f64,
{
    /// Replace the heuristic.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> WorldPather<'w, C, H2>
    where
        H2: Fn(Cell, Cell, &World) -> f64,
    {
        WorldPather {
            world: self.world,
            cost: self.cost,
            heuristic,
        }
    }

    /// The underlying world.
    pub fn world(&self) -> &'w World {
        self.world
    }
}

impl<C, H> Pather for WorldPather<'_, C, H> {
    fn dims(&self) -> Dims {
        self.world.dims()
    }
}

impl<C, H> WeightedPather for WorldPather<'_, C, H>
where
    C: Fn(Cell, Cell, &World) -> f64,
{
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        (self.cost)(from, to, self.world)
    }
}

impl<C, H> AstarPather for WorldPather<'_, C, H>
where
    C: Fn(Cell, Cell, &World) -> f64,
    H: Fn(Cell, Cell, &World) -> f64,
{
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        (self.heuristic)(from, to, self.world)
    }
}
