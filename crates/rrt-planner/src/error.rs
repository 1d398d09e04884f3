use rrt_core::{CoreError, Point};
use rrt_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("start {0} is not in freespace")]
    StartInCollision(Point),

    #[error("goal {0} is not in freespace")]
    GoalInCollision(Point),

    #[error("path extraction failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type PlanResult<T> = Result<T, PlanError>;
