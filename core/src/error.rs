//! Common error types for Mnemo.

use thiserror::Error;

/// Errors raised by the data model itself.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A composite edge identifier did not have the `from|to|edgeType` shape.
    #[error("Invalid edge identifier: {key}")]
    InvalidEdgeKey { key: String },
}

impl GraphError {
    pub fn invalid_edge_key(key: impl Into<String>) -> Self {
        Self::InvalidEdgeKey { key: key.into() }
    }
}

/// Result type for data model operations.
pub type GraphResult<T> = Result<T, GraphError>;
