//! A* over a [`Graph`], with edge weights taken from vertex positions.
//!
//! # Cost model
//!
//! The weight of edge `(a, b)` is the Euclidean distance between their
//! points.  [`a_star`] uses straight-line distance to the target as the
//! heuristic, which is admissible and consistent for that weight, so the
//! first time the target is popped its path is a shortest one.
//!
//! [`a_star_with`] accepts any heuristic; optimality then holds only if the
//! caller's heuristic never overestimates.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use rrt_core::{Point, PointArena, VertexId};

use crate::{Graph, SpatialError, SpatialResult};

/// `f64` with a total order, for use as a heap key.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Shortest path from `start` to `target` as a vertex sequence, both ends
/// included.
///
/// `start == target` yields `[start]`.  Fails with
/// [`SpatialError::VertexNotFound`] if either end is not in `graph`, and
/// with [`SpatialError::NoPath`] if they are disconnected.
pub fn a_star(
    graph: &Graph,
    arena: &PointArena,
    start: VertexId,
    target: VertexId,
) -> SpatialResult<Vec<VertexId>> {
    a_star_with(graph, arena, start, target, |p, goal| p.dist(goal))
}

/// [`a_star`] with a caller-supplied heuristic `h(point, target_point)`.
pub fn a_star_with<H>(
    graph: &Graph,
    arena: &PointArena,
    start: VertexId,
    target: VertexId,
    heuristic: H,
) -> SpatialResult<Vec<VertexId>>
where
    H: Fn(Point, Point) -> f64,
{
    for v in [start, target] {
        if !graph.contains(v) {
            return Err(SpatialError::VertexNotFound(v));
        }
    }
    if start == target {
        return Ok(vec![start]);
    }

    let goal = arena[target];

    // g[v] = best known path length to v; parent[v] = predecessor on it.
    let mut g: FxHashMap<VertexId, f64> = FxHashMap::default();
    let mut parent: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    g.insert(start, 0.0);

    // Min-heap on f = g + h.  Secondary key VertexId keeps tie-breaking
    // deterministic.
    let mut heap: BinaryHeap<Reverse<(Cost, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(heuristic(arena[start], goal)), start)));

    while let Some(Reverse((Cost(f), vertex))) = heap.pop() {
        if vertex == target {
            return Ok(reconstruct(&parent, target));
        }

        let cost = g[&vertex];
        // Skip stale heap entries.
        if f > cost + heuristic(arena[vertex], goal) {
            continue;
        }

        for &next in graph.neighbors(vertex)? {
            let tentative = cost + arena.dist(vertex, next);
            if g.get(&next).is_none_or(|&known| tentative < known) {
                g.insert(next, tentative);
                parent.insert(next, vertex);
                heap.push(Reverse((Cost(tentative + heuristic(arena[next], goal)), next)));
            }
        }
    }

    Err(SpatialError::NoPath { from: start, to: target })
}

fn reconstruct(parent: &FxHashMap<VertexId, VertexId>, target: VertexId) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut cur = target;
    while let Some(&prev) = parent.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

/// Sum of Euclidean segment lengths along `path`.  Zero for fewer than two
/// vertices.
pub fn path_cost(arena: &PointArena, path: &[VertexId]) -> f64 {
    path.windows(2).map(|w| arena.dist(w[0], w[1])).sum()
}
