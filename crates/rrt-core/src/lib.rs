//! `rrt-core`: foundational types for the `rrt` planning workspace.
//!
//! This crate is a dependency of every other `rrt-*` crate.  It has no
//! `rrt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `Point`, `Side`, orientation test, `GEOMETRY_EPSILON`     |
//! | [`ids`]     | `VertexId`                                                |
//! | [`arena`]   | `PointArena`: per-run append-only point storage          |
//! | [`rng`]     | `PlannerRng` (seedable, `SmallRng`-backed)                |
//! | [`config`]  | `PlannerConfig`                                           |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Point` and the config.  |

pub mod arena;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arena::PointArena;
pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GEOMETRY_EPSILON, Point, Side};
pub use ids::VertexId;
pub use rng::PlannerRng;
