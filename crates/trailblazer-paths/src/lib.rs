//! Grid search and the data structures behind it.
//!
//! This crate provides:
//!
//! - **Dijkstra** and **A\*** shortest paths ([`dijkstra_path`], [`astar_path`])
//! - a **union-find** over grid cells ([`DisjointSet`])
//! - a binary-heap **priority queue with decrease-key** ([`IndexedPriorityQueue`])
//! - stock cost functions and heuristics ([`costs`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`WorldPather`] adapts a [`World`](trailblazer_core::World) plus plain
//! cost / heuristic functions to these traits.

pub mod costs;
mod disjoint_set;
mod distance;
mod error;
mod neighbors;
mod observer;
mod pather;
mod queue;
mod search;
mod traits;

pub use disjoint_set::DisjointSet;
pub use distance::manhattan;
pub use error::{Error, Result};
pub use neighbors::Neighbors;
pub use observer::{SearchObserver, Visit, VisitLog};
pub use pather::{WorldFn, WorldPather};
pub use queue::IndexedPriorityQueue;
pub use search::{Path, astar_path, dijkstra_path};
pub use traits::{AstarPather, Pather, WeightedPather};
