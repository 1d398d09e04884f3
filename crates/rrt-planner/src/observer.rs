//! Planner observer trait for progress reporting and visualisation.

use rrt_core::Point;

use crate::Plan;

/// Callbacks invoked by the planners as the tree grows.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: edge recorder
///
/// ```rust,ignore
/// struct EdgeRecorder { edges: Vec<(Point, Point)> }
///
/// impl PlannerObserver for EdgeRecorder {
///     fn on_vertex_added(&mut self, vertex: Point, parent: Point) {
///         self.edges.push((parent, vertex));
///     }
/// }
/// ```
pub trait PlannerObserver {
    /// Called at the start of every sampling iteration (1-based).
    ///
    /// `vertices` is the number of vertices in the tree(s) so far.
    fn on_iteration(&mut self, _iteration: usize, _vertices: usize) {}

    /// Called whenever a vertex joins a tree, with the vertex it hangs off.
    fn on_vertex_added(&mut self, _vertex: Point, _parent: Point) {}

    /// Called when RRT* moves `vertex` from `old_parent` to `new_parent`.
    fn on_rewire(&mut self, _vertex: Point, _old_parent: Point, _new_parent: Point) {}

    /// Called once with the finished plan, successful or not.
    fn on_finish(&mut self, _plan: &Plan) {}
}

/// A [`PlannerObserver`] that does nothing.
pub struct NoopObserver;

impl PlannerObserver for NoopObserver {}
