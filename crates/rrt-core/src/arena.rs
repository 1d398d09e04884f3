//! Append-only storage for the configurations sampled during one planning run.
//!
//! # Ownership
//!
//! The KD-tree, the graph and the RRT* parent/cost maps all refer to the same
//! sampled points.  None of them owns the points: they hold [`VertexId`]s
//! into a `PointArena` that outlives all three.  Points are never mutated or
//! removed once pushed, so an id stays valid for the lifetime of the arena.
//!
//! ```
//! use rrt_core::{Point, PointArena};
//!
//! let mut arena = PointArena::new();
//! let a = arena.push(Point::new(0.0, 0.0));
//! let b = arena.push(Point::new(3.0, 4.0));
//! assert_eq!(arena.len(), 2);
//! assert_eq!(arena[a].dist(arena[b]), 5.0);
//! ```

use std::ops::Index;

use crate::{CoreError, CoreResult, Point, VertexId};

/// Growable, append-only `Vec<Point>` addressed by [`VertexId`].
#[derive(Clone, Debug, Default)]
pub struct PointArena {
    points: Vec<Point>,
}

impl PointArena {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Pre-allocate for the expected number of samples (usually the
    /// planner's node budget) to avoid reallocation mid-run.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Store `p` and return its id (sequential from 0).
    pub fn push(&mut self, p: Point) -> VertexId {
        let id = VertexId(self.points.len() as u32);
        self.points.push(p);
        id
    }

    /// Position of vertex `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn point(&self, id: VertexId) -> Point {
        self.points[id.index()]
    }

    /// Checked variant of [`point`](Self::point).
    pub fn try_point(&self, id: VertexId) -> CoreResult<Point> {
        self.points.get(id.index()).copied().ok_or(CoreError::UnknownVertex(id))
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Euclidean distance between two stored vertices.
    #[inline]
    pub fn dist(&self, a: VertexId, b: VertexId) -> f64 {
        self.point(a).dist(self.point(b))
    }

    /// `(id, point)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (VertexId(i as u32), p))
    }

    /// Resolve a sequence of ids to their positions.
    pub fn resolve(&self, ids: &[VertexId]) -> Vec<Point> {
        ids.iter().map(|&id| self.point(id)).collect()
    }
}

impl Index<VertexId> for PointArena {
    type Output = Point;

    #[inline]
    fn index(&self, id: VertexId) -> &Point {
        &self.points[id.index()]
    }
}
