//! Manager error types.

use mnemo_core::GraphError;
use mnemo_store::StoreError;
use mnemo_transaction::TransactionError;
use mnemo_validator::ValidationError;
use thiserror::Error;

/// Result type for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;

/// Errors that can occur while running a node or edge operation.
///
/// Wrapped errors keep their own message so callers see exactly what the
/// failing component reported.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Raw input passed the shape checks but still did not decode.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl ManagerError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// The validation failure behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ManagerError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(e.to_string())
    }
}
