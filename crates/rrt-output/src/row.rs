//! Plain data row types written by output backends.

use rrt_core::{Point, VertexId};

/// One waypoint of a plan's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRow {
    /// Position along the path, from 0 at the start.
    pub seq:    u32,
    pub vertex: VertexId,
    pub point:  Point,
}

/// One undirected edge of the explored graph, `from < to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRow {
    pub from:       VertexId,
    pub to:         VertexId,
    pub from_point: Point,
    pub to_point:   Point,
}

/// One hull vertex of an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleRow {
    /// Index of the obstacle in the map.
    pub obstacle: u32,
    /// Index of the vertex within the hull.
    pub vertex:   u32,
    /// `true` for the robot-radius expansion, `false` for the raw hull.
    pub expanded: bool,
    pub point:    Point,
}

/// Tree size at a sampled iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRow {
    pub iteration: u64,
    pub vertices:  u64,
}
