//! Transaction error types.

use thiserror::Error;

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// BEGIN while a transaction is active.
    #[error("Transaction already in progress")]
    AlreadyInProgress,

    /// An operation that needs an active transaction ran without one.
    #[error("No transaction in progress")]
    NoTransaction,

    /// COMMIT without an active transaction.
    #[error("No transaction to commit")]
    NothingToCommit,

    /// ROLLBACK without an active transaction.
    #[error("No transaction to rollback")]
    NothingToRollback,

    /// The working snapshot could not be loaded.
    #[error("store error: {0}")]
    Store(#[from] mnemo_store::StoreError),
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
