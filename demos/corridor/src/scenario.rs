//! The built-in corridor scenario.
//!
//! Three walls leave alternating gaps at the top and bottom of a 20 × 20
//! field, so any path from the lower-left to the upper-right corner has to
//! zig-zag.  The same map ships as `maps/corridor.txt`.

use rrt_core::{Point, PlannerConfig};

pub const CORRIDOR_MAP: &str = include_str!("../maps/corridor.txt");

pub const START: Point = Point { x: -8.0, y: -8.0 };
pub const GOAL: Point = Point { x: 9.0, y: 8.0 };

pub const ROBOT_RADIUS: f64 = 0.25;

pub fn config() -> PlannerConfig {
    PlannerConfig {
        max_nodes:     20_000,
        epsilon:       0.3,
        goal_bias:     0.1,
        search_radius: 1.5,
        seed:          42,
    }
}
