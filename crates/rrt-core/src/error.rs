//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::VertexId;

/// The base error type for `rrt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("vertex {0} is not in the arena")]
    UnknownVertex(VertexId),
}

/// Shorthand result type for `rrt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
