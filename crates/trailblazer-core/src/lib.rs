//! Value types shared across the *trailblazer* crates.
//!
//! This crate provides grid geometry ([`Cell`], [`Dims`]), canonical
//! undirected grid edges ([`Edge`]) and the per-cell cost grid ([`World`])
//! that path searches run over.

pub mod edge;
pub mod geom;
pub mod world;

pub use edge::Edge;
pub use geom::{Cell, Dims, DimsIter};
pub use world::World;
