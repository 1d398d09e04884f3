//! The result of a planning run.

use rrt_core::{Point, PointArena, VertexId};
use rrt_spatial::{Graph, path_cost};

/// Path, tree and sample storage produced by one planner call.
///
/// An unsuccessful run is still a `Plan`: the path is empty but the graph
/// and arena hold everything that was explored.
#[derive(Clone, Debug)]
pub struct Plan {
    path:       Vec<Point>,
    path_ids:   Vec<VertexId>,
    graph:      Graph,
    arena:      PointArena,
    iterations: usize,
}

impl Plan {
    pub(crate) fn found(path_ids: Vec<VertexId>, graph: Graph, arena: PointArena, iterations: usize) -> Self {
        let path = arena.resolve(&path_ids);
        Self { path, path_ids, graph, arena, iterations }
    }

    pub(crate) fn exhausted(graph: Graph, arena: PointArena, iterations: usize) -> Self {
        Self { path: Vec::new(), path_ids: Vec::new(), graph, arena, iterations }
    }

    /// `true` if a path from start to goal was found.
    pub fn is_success(&self) -> bool {
        !self.path.is_empty()
    }

    /// Waypoints from start to goal; empty on failure.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Arena ids of [`path`](Self::path), in the same order.
    pub fn path_ids(&self) -> &[VertexId] {
        &self.path_ids
    }

    /// The explored tree (both trees, joined, for RRT-Connect).
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn arena(&self) -> &PointArena {
        &self.arena
    }

    /// Length of the path; zero on failure.
    pub fn cost(&self) -> f64 {
        path_cost(&self.arena, &self.path_ids)
    }

    /// Sampling iterations spent.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of vertices in the graph.
    pub fn tree_size(&self) -> usize {
        self.graph.vertex_count()
    }
}
