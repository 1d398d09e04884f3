//! Spatial-subsystem error type.

use thiserror::Error;

use rrt_core::VertexId;

/// Errors produced by `rrt-spatial`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
