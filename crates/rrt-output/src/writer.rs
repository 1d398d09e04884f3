//! The `PlanWriter` trait and row builders shared by every backend.

use rrt_map::Map;
use rrt_planner::Plan;

use crate::{EdgeRow, ObstacleRow, OutputResult, PathRow, ProgressRow};

/// Trait implemented by output backends.
pub trait PlanWriter {
    fn write_path(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()>;

    fn write_obstacles(&mut self, rows: &[ObstacleRow]) -> OutputResult<()>;

    fn write_progress(&mut self, row: &ProgressRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Path rows for `plan`; empty for a failed plan.
pub fn path_rows(plan: &Plan) -> Vec<PathRow> {
    plan.path_ids()
        .iter()
        .zip(plan.path())
        .enumerate()
        .map(|(seq, (&vertex, &point))| PathRow { seq: seq as u32, vertex, point })
        .collect()
}

/// Edge rows for `plan`'s graph, sorted by `(from, to)` so output is stable.
pub fn edge_rows(plan: &Plan) -> Vec<EdgeRow> {
    let arena = plan.arena();
    let mut edges: Vec<_> = plan.graph().edges().collect();
    edges.sort_unstable();
    edges
        .into_iter()
        .map(|(from, to)| EdgeRow { from, to, from_point: arena[from], to_point: arena[to] })
        .collect()
}

/// Hull rows for every raw and expanded obstacle of `map`.
pub fn obstacle_rows(map: &Map) -> Vec<ObstacleRow> {
    let raw = map.obstacles().iter().map(|o| (o, false));
    let expanded = map.expanded_obstacles().iter().map(|o| (o, true));
    raw.enumerate()
        .chain(expanded.enumerate())
        .flat_map(|(index, (obstacle, expanded))| {
            obstacle.vertices().iter().enumerate().map(move |(vertex, &point)| ObstacleRow {
                obstacle: index as u32,
                vertex: vertex as u32,
                expanded,
                point,
            })
        })
        .collect()
}

/// Write `plan`'s path and edges and `map`'s obstacles, then finish.
pub fn write_plan<W: PlanWriter>(writer: &mut W, plan: &Plan, map: &Map) -> OutputResult<()> {
    writer.write_path(&path_rows(plan))?;
    writer.write_edges(&edge_rows(plan))?;
    writer.write_obstacles(&obstacle_rows(map))?;
    writer.finish()
}
