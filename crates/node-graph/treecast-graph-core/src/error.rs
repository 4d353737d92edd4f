//! Error taxonomy for node evaluation.

use thiserror::Error;
use treecast_api_core::CoercionError;

use crate::tree::ShapeError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("input '{input}': {source}")]
    UnsupportedShape {
        input: String,
        #[source]
        source: ShapeError,
    },

    #[error("expected {expected} input values, got {got}")]
    InputArity { expected: usize, got: usize },

    /// A compute-hook failure, passed through verbatim. The engine neither
    /// wraps nor retries it; remaining rows are abandoned.
    #[error("{0}")]
    Domain(String),
}
