//! Run-time selection between the two planners.

use std::fmt;
use std::str::FromStr;

use rrt_core::{CoreError, Point, PlannerConfig};
use rrt_map::Map;

use crate::{Plan, PlanError, PlanResult, PlannerObserver, rrt_connect_with, rrt_star_with};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    RrtConnect,
    RrtStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::RrtConnect, Algorithm::RrtStar];

    /// Snake-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::RrtConnect => "rrt_connect",
            Algorithm::RrtStar => "rrt_star",
        }
    }

    pub fn run<O: PlannerObserver>(
        self,
        start: Point,
        goal: Point,
        map: &Map,
        config: &PlannerConfig,
        observer: &mut O,
    ) -> PlanResult<Plan> {
        match self {
            Algorithm::RrtConnect => rrt_connect_with(start, goal, map, config, observer),
            Algorithm::RrtStar => rrt_star_with(start, goal, map, config, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PlanError;

    fn from_str(s: &str) -> PlanResult<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "rrt_connect" | "connect" => Ok(Algorithm::RrtConnect),
            "rrt_star" | "star" => Ok(Algorithm::RrtStar),
            other => Err(PlanError::Core(CoreError::Config(format!("unknown algorithm {other:?}")))),
        }
    }
}
