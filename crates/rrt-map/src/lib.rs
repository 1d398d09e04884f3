//! `rrt-map`: the geometric collision oracle.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`obstacle`] | `Obstacle` (convex hull), `minkowski_sum`, `convex_hull`  |
//! | [`map`]      | `Map`: raw + radius-expanded obstacles, validity queries  |
//! | [`loader`]   | `load_map`, `load_map_reader` for the text map format     |
//! | [`error`]    | `GeometryError`, `MapError`, `MapResult<T>`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Obstacle`.             |

pub mod error;
pub mod loader;
pub mod map;
pub mod obstacle;


pub use error::{GeometryError, GeometryResult, MapError, MapResult};
pub use loader::{load_map, load_map_reader};
pub use map::Map;
pub use obstacle::{Obstacle, convex_hull, minkowski_sum};
