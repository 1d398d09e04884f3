//! A KD-tree and graph grown together, as both planners need.

use rrt_core::{Point, PlannerConfig, PointArena, VertexId};
use rrt_map::Map;
use rrt_spatial::{Graph, Insertion, KdTree};

use crate::{Extension, Plan, PlanError, PlanResult, PlannerObserver, steer};

/// Most vertices reserved before the first iteration.  `max_nodes` caps
/// iterations, not memory: storage past this grows on demand.
pub(crate) const PREALLOC_CAP: usize = 1 << 16;

/// Vertex slots to reserve for a run with budget `max_nodes` (plus the two
/// endpoints).
pub(crate) fn initial_capacity(max_nodes: usize) -> usize {
    max_nodes.saturating_add(2).min(PREALLOC_CAP)
}

/// Reject configurations and endpoints no planner can start from.
///
/// Returns the finished plan when `start` and `goal` coincide, so callers
/// need no sampling loop for that case.
pub(crate) fn check_endpoints(
    start: Point,
    goal: Point,
    map: &Map,
    config: &PlannerConfig,
) -> PlanResult<Option<Plan>> {
    config.validate()?;
    if !map.is_freespace(start) {
        return Err(PlanError::StartInCollision(start));
    }
    if !map.is_freespace(goal) {
        return Err(PlanError::GoalInCollision(goal));
    }
    if start == goal {
        let mut arena = PointArena::new();
        let root = arena.push(start);
        return Ok(Some(Plan::found(vec![root], Graph::with_root(root), arena, 0)));
    }
    Ok(None)
}

pub(crate) struct Tree {
    pub kd:    KdTree,
    pub graph: Graph,
}

impl Tree {
    pub fn new(root: VertexId, capacity: usize) -> Self {
        Self { kd: KdTree::with_capacity(root, capacity), graph: Graph::with_root(root) }
    }

    pub fn root(&self) -> VertexId {
        self.kd.root()
    }

    /// Take one `epsilon` step from the nearest vertex toward `target`.
    ///
    /// `target_id` is the target's arena id when it already has one (the
    /// other tree's vertex, or a pre-allocated goal).  On `Reached` that id is
    /// attached to this tree instead of allocating a copy of the point.
    pub fn extend<O: PlannerObserver>(
        &mut self,
        arena: &mut PointArena,
        map: &Map,
        target: Point,
        target_id: Option<VertexId>,
        epsilon: f64,
        observer: &mut O,
    ) -> Extension {
        let near = self.kd.nearest_neighbor(arena, target);
        let near_point = arena[near];
        let step = steer(near_point, target, epsilon);

        if !map.is_valid_path(near_point, step.point()) {
            return Extension::Trapped;
        }

        let insertion = match (step.is_reached(), target_id) {
            (true, Some(id)) => self.kd.insert_vertex(arena, id),
            _ => self.kd.insert(arena, step.point()),
        };

        match insertion {
            Insertion::Existing(v) if step.is_reached() => Extension::Reached(v),
            // Stepping onto a vertex the tree already has is no progress.
            Insertion::Existing(_) => Extension::Trapped,
            Insertion::Inserted(v) => {
                self.graph.add_edge(near, v);
                observer.on_vertex_added(arena[v], near_point);
                if step.is_reached() { Extension::Reached(v) } else { Extension::Advanced(v) }
            }
        }
    }
}
