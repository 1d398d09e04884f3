//! RRT-Connect: grow one tree from each end until they meet.

use log::{debug, info, warn};

use rrt_core::{Point, PlannerConfig, PlannerRng, PointArena, VertexId};
use rrt_map::Map;
use rrt_spatial::{Graph, a_star};

use crate::tree::{Tree, check_endpoints, initial_capacity};
use crate::{Extension, NoopObserver, Plan, PlanResult, PlannerObserver, sample_free};

/// Plan from `start` to `goal` with RRT-Connect.
///
/// See [`rrt_connect_with`].
pub fn rrt_connect(start: Point, goal: Point, map: &Map, config: &PlannerConfig) -> PlanResult<Plan> {
    rrt_connect_with(start, goal, map, config, &mut NoopObserver)
}

/// Plan from `start` to `goal` with RRT-Connect, reporting progress to
/// `observer`.
///
/// Each iteration extends the active tree one step toward a free sample
/// (or, with probability `goal_bias`, toward the other tree's root), then
/// lets the other tree chase the new vertex until it is blocked or reaches
/// it.  The trees swap roles after every iteration that does not join them.
///
/// On success the returned graph is the union of both trees and the path is
/// the A* route through it.  After `max_nodes` iterations without a join the
/// plan has an empty path.
pub fn rrt_connect_with<O: PlannerObserver>(
    start: Point,
    goal: Point,
    map: &Map,
    config: &PlannerConfig,
    observer: &mut O,
) -> PlanResult<Plan> {
    if let Some(plan) = check_endpoints(start, goal, map, config)? {
        observer.on_finish(&plan);
        return Ok(plan);
    }
    debug!(
        "rrt_connect: {start} -> {goal}, max_nodes {}, epsilon {}, goal_bias {}, seed {}",
        config.max_nodes, config.epsilon, config.goal_bias, config.seed
    );

    let mut rng = PlannerRng::new(config.seed);
    let mut arena = PointArena::with_capacity(initial_capacity(config.max_nodes));
    let start_id = arena.push(start);
    let goal_id = arena.push(goal);

    let capacity = initial_capacity(config.max_nodes / 2);
    let mut trees = [Tree::new(start_id, capacity), Tree::new(goal_id, capacity)];
    let mut active = 0;

    for iteration in 1..=config.max_nodes {
        observer.on_iteration(iteration, trees[0].kd.len() + trees[1].kd.len());

        let [first, second] = &mut trees;
        let (here, there) = if active == 0 { (first, second) } else { (second, first) };

        let (target, target_id) = if rng.gen_bool(config.goal_bias) {
            let root = there.root();
            (arena[root], Some(root))
        } else {
            match sample_free(map, &mut rng) {
                Some(p) => (p, None),
                None => continue,
            }
        };

        let meeting = match here.extend(&mut arena, map, target, target_id, config.epsilon, observer) {
            Extension::Trapped => None,
            Extension::Reached(new) | Extension::Advanced(new) => {
                chase(there, &mut arena, map, new, config.epsilon, observer).map(|meet| (new, meet))
            }
        };

        if let Some((new, meet)) = meeting {
            let graph = join(trees, new, meet);
            let path_ids = a_star(&graph, &arena, start_id, goal_id)?;
            let plan = Plan::found(path_ids, graph, arena, iteration);
            info!(
                "rrt_connect: trees joined after {iteration} iterations, {} vertices, path length {:.3}",
                plan.tree_size(),
                plan.cost()
            );
            observer.on_finish(&plan);
            return Ok(plan);
        }

        active ^= 1;
    }

    let graph = union(trees);
    let plan = Plan::exhausted(graph, arena, config.max_nodes);
    warn!(
        "rrt_connect: trees did not meet within {} iterations ({} vertices)",
        config.max_nodes,
        plan.tree_size()
    );
    observer.on_finish(&plan);
    Ok(plan)
}

/// Extend `tree` toward vertex `target` until it is blocked or gets there.
/// Returns the vertex of `tree` that coincides with `target` on success.
pub(crate) fn chase<O: PlannerObserver>(
    tree: &mut Tree,
    arena: &mut PointArena,
    map: &Map,
    target: VertexId,
    epsilon: f64,
    observer: &mut O,
) -> Option<VertexId> {
    let goal = arena[target];
    loop {
        match tree.extend(arena, map, goal, Some(target), epsilon, observer) {
            Extension::Advanced(_) => {}
            Extension::Reached(meet) => return Some(meet),
            Extension::Trapped => return None,
        }
    }
}

fn union(trees: [Tree; 2]) -> Graph {
    let [first, second] = trees;
    let mut graph = first.graph;
    graph.merge(&second.graph);
    graph
}

/// Union of both trees after one grew `new` and the other reached it as
/// `meet`.  The ids differ when the reaching tree already held a vertex
/// equal to `new`; a zero-length edge then ties the two.
pub(crate) fn join(trees: [Tree; 2], new: VertexId, meet: VertexId) -> Graph {
    let mut graph = union(trees);
    if new != meet {
        graph.add_edge(new, meet);
    }
    graph
}
