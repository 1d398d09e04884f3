//! `rrt-spatial`: the data structures a planning run grows, and the search
//! that reads the result.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`kdtree`] | `KdTree`: nearest-neighbour and radius queries over vertices |
//! | [`graph`]  | `Graph`: undirected adjacency with running counts            |
//! | [`search`] | `a_star`, `a_star_with`, `path_cost`                         |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! Every structure here stores [`VertexId`](rrt_core::VertexId)s and reads
//! positions from a caller-supplied [`PointArena`](rrt_core::PointArena).

pub mod error;
pub mod graph;
pub mod kdtree;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use graph::Graph;
pub use kdtree::{Branch, Insertion, KdTree, Lookup};
pub use search::{a_star, a_star_with, path_cost};
