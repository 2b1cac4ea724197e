//! Stock cost functions and heuristics for [`WorldPather`](crate::WorldPather).
//!
//! Costs take `(from, to, world)` for adjacent cells; heuristics take
//! `(cell, goal, world)`. All return non-negative values.

use trailblazer_core::{Cell, World};

use crate::distance::manhattan;

/// Every step costs 1, regardless of terrain.
pub fn uniform_cost(_from: Cell, _to: Cell, _world: &World) -> f64 {
    1.0
}

/// Stepping onto `to` costs the value stored there.
pub fn entry_cost(_from: Cell, to: Cell, world: &World) -> f64 {
    world.at(to).unwrap_or(f64::INFINITY)
}

/// A step costs 1 plus the absolute height difference between the cells.
pub fn elevation_cost(from: Cell, to: Cell, world: &World) -> f64 {
    match (world.at(from), world.at(to)) {
        (Some(a), Some(b)) => 1.0 + (b - a).abs(),
        _ => f64::INFINITY,
    }
}

/// No estimate; turns A* into Dijkstra.
pub fn zero_heuristic(_cell: Cell, _goal: Cell, _world: &World) -> f64 {
    0.0
}

/// Manhattan distance in unit steps.
///
/// Admissible for [`uniform_cost`] and [`elevation_cost`], where every step
/// costs at least 1.
pub fn manhattan_heuristic(cell: Cell, goal: Cell, _world: &World) -> f64 {
    manhattan(cell, goal) as f64
}

/// Manhattan distance scaled by the cheapest possible step.
///
/// With `min_step = world.min_cost()` this is admissible for [`entry_cost`].
pub fn scaled_manhattan(min_step: f64) -> impl Fn(Cell, Cell, &World) -> f64 + Copy {
    let step = min_step.max(0.0);
    move |cell: Cell, goal: Cell, _world: &World| manhattan(cell, goal) as f64 * step
}
