//! Geometry and map-loading error types.

use thiserror::Error;

/// Reasons a vertex list is rejected as an obstacle.
///
/// `index` is the position of the middle vertex of the offending triple.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a convex obstacle needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertices around index {index} are collinear")]
    Collinear { index: usize },

    #[error("turn direction reverses at vertex {index}; polygon is not convex")]
    NotConvex { index: usize },

    #[error("polygon winds around more than once; it is self-intersecting")]
    SelfIntersecting,

    #[error("non-finite coordinate at vertex {index}")]
    NonFinite { index: usize },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors produced while reading a map description.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map parse error: {0}")]
    Parse(String),

    #[error("obstacle {index} is invalid: {source}")]
    InvalidObstacle {
        index:  usize,
        #[source]
        source: GeometryError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
