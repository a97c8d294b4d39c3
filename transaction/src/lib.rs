//! Mnemo Transaction
//!
//! Logical transactions over graph snapshots.
//!
//! Responsibilities:
//! - Track whether a transaction is active (one at a time)
//! - Load the working snapshot at BEGIN
//! - Record compensating actions and replay them, newest first, on ROLLBACK
//! - Announce every lifecycle transition through the event notifier
//!
//! The coordinator does not persist anything itself: callers save through
//! the store as part of each mutation, and COMMIT only closes the undo log.

mod coordinator;
mod error;

pub use coordinator::{
    CompensationFailure, RollbackAction, TransactionCoordinator, TransactionState,
};
pub use error::{TransactionError, TransactionResult};
