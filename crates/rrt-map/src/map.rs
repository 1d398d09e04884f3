//! The planning environment: bounds, obstacles, and the robot radius they
//! are expanded by.
//!
//! # Raw vs. expanded obstacles
//!
//! A `Map` keeps two parallel obstacle lists.  The raw list is what the map
//! file describes (and what a renderer draws).  The expanded list is the raw
//! list grown by the robot radius via [`minkowski_sum`]; every validity query
//! runs against the expanded list only, so a point robot checked against it
//! is equivalent to the disc robot checked against the raw obstacles.
//!
//! # Sampling bounds
//!
//! Samples are drawn from `[-width, width) × [-height, height)`.

use rrt_core::Point;

use crate::obstacle::{Obstacle, minkowski_sum};

/// Obstacle set plus the bounds used for sampling.  Read-only during
/// planning.
#[derive(Clone, Debug)]
pub struct Map {
    width:        f64,
    height:       f64,
    robot_radius: f64,
    obstacles:    Vec<Obstacle>,
    expanded:     Vec<Obstacle>,
}

impl Map {
    /// Build a map and derive the expanded obstacles once.
    pub fn new(width: f64, height: f64, robot_radius: f64, obstacles: Vec<Obstacle>) -> Self {
        let expanded = obstacles.iter().map(|o| minkowski_sum(o, robot_radius)).collect();
        Self { width, height, robot_radius, obstacles, expanded }
    }

    /// A map with no obstacles.
    pub fn empty(width: f64, height: f64, robot_radius: f64) -> Self {
        Self::new(width, height, robot_radius, Vec::new())
    }

    /// Add an obstacle; its expansion is computed immediately.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.expanded.push(minkowski_sum(&obstacle, self.robot_radius));
        self.obstacles.push(obstacle);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn robot_radius(&self) -> f64 {
        self.robot_radius
    }

    /// Obstacles as supplied.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Obstacles grown by the robot radius, index-aligned with
    /// [`obstacles`](Self::obstacles).
    pub fn expanded_obstacles(&self) -> &[Obstacle] {
        &self.expanded
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `p` lies within the sampling rectangle.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x.abs() <= self.width && p.y.abs() <= self.height
    }

    /// `false` iff `p` is inside (or on) any expanded obstacle.
    pub fn is_freespace(&self, p: Point) -> bool {
        !self.expanded.iter().any(|o| o.collides(p))
    }

    /// `false` iff the segment `p1 – p2` touches any expanded obstacle.
    ///
    /// A segment hits a convex obstacle if it properly crosses an edge or if
    /// one of its endpoints is inside.  The midpoint is checked as well so
    /// that a segment entering and leaving exactly through hull vertices
    /// (where the crossing test sees `On`) is still rejected.
    pub fn is_valid_path(&self, p1: Point, p2: Point) -> bool {
        let mid = p1.midpoint(p2);
        !self.expanded.iter().any(|o| {
            o.collides(p1) || o.collides(p2) || o.collides(mid) || o.path_collides(p1, p2)
        })
    }
}
