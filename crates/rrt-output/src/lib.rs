//! `rrt-output`: plan export for plotting and statistics.
//!
//! | File            | One row per                                     |
//! |-----------------|-------------------------------------------------|
//! | `path.csv`      | path waypoint, in order                         |
//! | `edges.csv`     | undirected tree edge                            |
//! | `obstacles.csv` | obstacle hull vertex (raw and expanded)         |
//! | `progress.csv`  | sampled iteration (every `interval` iterations) |
//!
//! Writers implement [`PlanWriter`]; [`PlanOutputObserver`] drives one from
//! the planner's `PlannerObserver` hooks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rrt_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = PlanOutputObserver::new(writer, 100);
//! obs.write_map(&map);
//! let plan = rrt_star_with(start, goal, &map, &config, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{EdgeRow, ObstacleRow, PathRow, ProgressRow};
pub use writer::{PlanWriter, write_plan};
