//! Session error types.

use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Storage could not be prepared or read.
    #[error("store error: {0}")]
    Store(#[from] mnemo_store::StoreError),

    /// A transaction could not be driven.
    #[error("transaction error: {0}")]
    Transaction(#[from] mnemo_transaction::TransactionError),

    /// A node or edge operation failed.
    #[error("{0}")]
    Manager(#[from] mnemo_manager::ManagerError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
