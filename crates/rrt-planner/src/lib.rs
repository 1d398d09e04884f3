//! `rrt-planner`: sampling-based path planning over an [`rrt_map::Map`].
//!
//! # Algorithms
//!
//! ```text
//! rrt_connect:  two trees, rooted at start and goal
//!   ① sample   : free configuration, or the other tree's root (goal_bias)
//!   ② extend   : active tree takes one epsilon step toward the sample
//!   ③ connect  : other tree steps toward the new vertex until
//!                 Trapped or Reached; Reached joins the trees
//!   ④ swap     : the other tree becomes active
//!
//! rrt_star:     one tree rooted at start, with parent/cost bookkeeping
//!   ① sample   : free configuration, or the goal (goal_bias)
//!   ② steer    : one epsilon step from the nearest vertex
//!   ③ parent   : cheapest collision-free vertex within search_radius
//!   ④ rewire   : neighbours that become cheaper through the new vertex
//!                 are re-parented onto it
//! ```
//!
//! Both return a [`Plan`].  Running out of budget is not an error: the plan
//! comes back with an empty path and the tree that was built.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rrt_core::{Point, PlannerConfig};
//! use rrt_map::Map;
//! use rrt_planner::rrt_star;
//!
//! let map = Map::empty(10.0, 10.0, 0.1);
//! let plan = rrt_star(Point::new(-1.0, -3.0), Point::new(9.0, 7.0), &map, &PlannerConfig::default())?;
//! assert!(plan.is_success());
//! ```

pub mod algorithm;
pub mod connect;
pub mod error;
pub mod observer;
pub mod plan;
pub mod star;
pub mod steer;
mod tree;


pub use algorithm::Algorithm;
pub use connect::{rrt_connect, rrt_connect_with};
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlannerObserver};
pub use plan::Plan;
pub use star::{rrt_star, rrt_star_with};
pub use steer::{Extension, Step, sample_free, steer};
