//! RRT*: a single tree that re-parents vertices onto cheaper routes as it
//! grows.
//!
//! # Bookkeeping
//!
//! Every tree vertex has a cost-to-come (root = 0) and every vertex but the
//! root a parent.  Rewiring a vertex lowers its cost by some `delta`; the
//! same `delta` is subtracted from every descendant so costs never go
//! stale.  Because costs are exact, a vertex can never be rewired onto one
//! of its own descendants (that route would be strictly longer), and the
//! graph stays a tree.

use log::{debug, info, trace, warn};
use rustc_hash::FxHashMap;

use rrt_core::{Point, PlannerConfig, PlannerRng, PointArena, VertexId};
use rrt_map::Map;
use rrt_spatial::Graph;

use crate::tree::{Tree, check_endpoints, initial_capacity};
use crate::{NoopObserver, Plan, PlanResult, PlannerObserver, Step, sample_free, steer};

/// Plan from `start` to `goal` with RRT*.
///
/// See [`rrt_star_with`].
pub fn rrt_star(start: Point, goal: Point, map: &Map, config: &PlannerConfig) -> PlanResult<Plan> {
    rrt_star_with(start, goal, map, config, &mut NoopObserver)
}

/// Plan from `start` to `goal` with RRT*, reporting progress to `observer`.
///
/// Succeeds the first time the goal itself is accepted as a vertex; the path
/// is the parent chain from the goal back to the start.  After `max_nodes`
/// iterations without that, the plan has an empty path and carries the tree
/// built so far.
pub fn rrt_star_with<O: PlannerObserver>(
    start: Point,
    goal: Point,
    map: &Map,
    config: &PlannerConfig,
    observer: &mut O,
) -> PlanResult<Plan> {
    grow(start, goal, map, config, observer).map(|(plan, _)| plan)
}

/// The RRT* loop.  Also returns the parent/cost bookkeeping of the final
/// tree.
pub(crate) fn grow<O: PlannerObserver>(
    start: Point,
    goal: Point,
    map: &Map,
    config: &PlannerConfig,
    observer: &mut O,
) -> PlanResult<(Plan, CostBook)> {
    if let Some(plan) = check_endpoints(start, goal, map, config)? {
        observer.on_finish(&plan);
        let book = CostBook::new(plan.path_ids()[0]);
        return Ok((plan, book));
    }
    debug!(
        "rrt_star: {start} -> {goal}, max_nodes {}, epsilon {}, goal_bias {}, search_radius {}, seed {}",
        config.max_nodes, config.epsilon, config.goal_bias, config.search_radius, config.seed
    );

    let mut rng = PlannerRng::new(config.seed);
    let mut arena = PointArena::with_capacity(initial_capacity(config.max_nodes));
    let start_id = arena.push(start);
    // Allocated up front so reaching it is an id comparison.
    let goal_id = arena.push(goal);

    let mut tree = Tree::new(start_id, initial_capacity(config.max_nodes));
    let mut book = CostBook::new(start_id);
    let mut rewires = 0usize;

    for iteration in 1..=config.max_nodes {
        observer.on_iteration(iteration, tree.kd.len());

        let (target, target_id) = if rng.gen_bool(config.goal_bias) {
            (goal, Some(goal_id))
        } else {
            match sample_free(map, &mut rng) {
                Some(p) => (p, None),
                None => continue,
            }
        };

        let near = tree.kd.nearest_neighbor(&arena, target);
        let step = steer(arena[near], target, config.epsilon);
        let new_point = step.point();
        if !map.is_valid_path(arena[near], new_point) || tree.kd.contains(&arena, new_point) {
            continue;
        }

        // Includes `near`: it is at most epsilon away.
        let neighbors = tree.kd.points_in_radius(&arena, new_point, config.search_radius);

        // ── Choose parent ─────────────────────────────────────────────────
        let mut parent = near;
        let mut cost = book.cost(near) + arena[near].dist(new_point);
        for &n in &neighbors {
            if n == near {
                continue;
            }
            let through = book.cost(n) + arena[n].dist(new_point);
            if through < cost && map.is_valid_path(arena[n], new_point) {
                parent = n;
                cost = through;
            }
        }

        let insertion = match (step, target_id) {
            (Step::Reached(_), Some(id)) => tree.kd.insert_vertex(&arena, id),
            _ => tree.kd.insert(&mut arena, new_point),
        };
        let new = insertion.id();
        tree.graph.add_edge(parent, new);
        book.attach(new, parent, cost);
        observer.on_vertex_added(new_point, arena[parent]);

        // ── Rewire ────────────────────────────────────────────────────────
        for &n in &neighbors {
            if n == parent {
                continue;
            }
            let through = cost + new_point.dist(arena[n]);
            if through < book.cost(n) && map.is_valid_path(new_point, arena[n]) {
                if let Some(old) = book.parent(n) {
                    tree.graph.remove_edge(n, old);
                    observer.on_rewire(arena[n], arena[old], new_point);
                }
                tree.graph.add_edge(n, new);
                book.reparent(&tree.graph, n, new, through);
                rewires += 1;
            }
        }

        if new == goal_id {
            let path_ids = book.backtrace(goal_id);
            let plan = Plan::found(path_ids, tree.graph, arena, iteration);
            info!(
                "rrt_star: goal reached after {iteration} iterations, {} vertices, {rewires} rewires, path length {:.3}",
                plan.tree_size(),
                plan.cost()
            );
            observer.on_finish(&plan);
            return Ok((plan, book));
        }
    }

    let plan = Plan::exhausted(tree.graph, arena, config.max_nodes);
    warn!(
        "rrt_star: goal not reached within {} iterations ({} vertices)",
        config.max_nodes,
        plan.tree_size()
    );
    observer.on_finish(&plan);
    Ok((plan, book))
}

// ── Parent / cost bookkeeping ─────────────────────────────────────────────────

pub(crate) struct CostBook {
    parent: FxHashMap<VertexId, VertexId>,
    cost:   FxHashMap<VertexId, f64>,
}

impl CostBook {
    fn new(root: VertexId) -> Self {
        let mut cost = FxHashMap::default();
        cost.insert(root, 0.0);
        Self { parent: FxHashMap::default(), cost }
    }

    /// Cost-to-come of `v`; infinite for a vertex not in the tree.
    pub(crate) fn cost(&self, v: VertexId) -> f64 {
        self.cost.get(&v).copied().unwrap_or(f64::INFINITY)
    }

    pub(crate) fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(&v).copied()
    }

    fn attach(&mut self, v: VertexId, parent: VertexId, cost: f64) {
        self.parent.insert(v, parent);
        self.cost.insert(v, cost);
    }

    /// Move `v` under `parent` at the lower `cost` and lower every
    /// descendant of `v` by the same amount.  `graph` must already reflect
    /// the new edge.
    fn reparent(&mut self, graph: &Graph, v: VertexId, parent: VertexId, cost: f64) {
        let delta = self.cost(v) - cost;
        self.attach(v, parent, cost);

        let mut stack = vec![v];
        while let Some(u) = stack.pop() {
            let Ok(adjacent) = graph.neighbors(u) else { continue };
            for &child in adjacent {
                if self.parent.get(&child) == Some(&u) {
                    if let Some(c) = self.cost.get_mut(&child) {
                        *c -= delta;
                    }
                    stack.push(child);
                }
            }
        }
        trace!("rrt_star: rewired {v} under {parent}, cost -{delta:.4}");
    }

    /// Parent chain from the root to `to`, both ends included.
    pub(crate) fn backtrace(&self, to: VertexId) -> Vec<VertexId> {
        let mut path = vec![to];
        let mut cur = to;
        while let Some(prev) = self.parent(cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}
