//! Transaction coordinator for sequencing begin/commit/rollback.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use mnemo_core::{run_guarded, BoxError, Graph};
use mnemo_events::{
    EventNotifier, AFTER_BEGIN_TRANSACTION, AFTER_COMMIT, AFTER_ROLLBACK,
    BEFORE_BEGIN_TRANSACTION, BEFORE_COMMIT, BEFORE_ROLLBACK,
};
use mnemo_store::GraphStore;
use serde_json::{json, Value};

use crate::error::{TransactionError, TransactionResult};

/// A deferred compensating action, run only if the transaction rolls back.
pub type RollbackAction = Box<dyn FnOnce() -> Result<(), BoxError> + Send>;

/// Transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// No transaction is active.
    Idle,
    /// A transaction is active.
    Active,
}

/// A compensation that failed during rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompensationFailure {
    /// Label given when the action was registered.
    pub label: String,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for CompensationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rollback action '{}' failed: {}", self.label, self.message)
    }
}

struct PendingAction {
    label: String,
    action: RollbackAction,
}

/// Coordinates one logical transaction at a time over a [`GraphStore`].
///
/// The application constructs one coordinator and hands it to whatever
/// drives mutations; a second BEGIN while a transaction is active fails
/// instead of waiting.
pub struct TransactionCoordinator {
    store: Arc<GraphStore>,
    events: EventNotifier,
    state: TransactionState,
    graph: Option<Graph>,
    rollback_actions: Vec<PendingAction>,
}

impl TransactionCoordinator {
    /// Create a new coordinator.
    pub fn new(store: Arc<GraphStore>, events: EventNotifier) -> Self {
        Self {
            store,
            events,
            state: TransactionState::Idle,
            graph: None,
            rollback_actions: Vec::new(),
        }
    }

    /// The store snapshots are loaded from.
    pub fn store(&self) -> &Arc<GraphStore> {
        &self.store
    }

    /// The notifier lifecycle events go to.
    pub fn events(&self) -> &EventNotifier {
        &self.events
    }

    /// Get the current transaction state.
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Check if a transaction is active.
    pub fn is_in_transaction(&self) -> bool {
        self.state == TransactionState::Active
    }

    /// Number of compensations recorded so far.
    pub fn pending_actions(&self) -> usize {
        self.rollback_actions.len()
    }

    // ========== Working Snapshot ==========

    /// The snapshot loaded at BEGIN. `None` unless a transaction is active.
    pub fn current_graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Mutable access to the working snapshot.
    pub fn current_graph_mut(&mut self) -> Option<&mut Graph> {
        self.graph.as_mut()
    }

    /// Mutable access to the working snapshot, failing outside a transaction.
    pub fn graph_mut(&mut self) -> TransactionResult<&mut Graph> {
        self.graph.as_mut().ok_or(TransactionError::NoTransaction)
    }

    // ========== Transaction Lifecycle ==========

    /// Begin a new transaction with a freshly loaded snapshot.
    pub fn begin_transaction(&mut self) -> TransactionResult<()> {
        if self.state == TransactionState::Active {
            return Err(TransactionError::AlreadyInProgress);
        }

        self.notify(BEFORE_BEGIN_TRANSACTION, json!({}));

        let graph = self.store.load()?;
        self.graph = Some(graph);
        self.rollback_actions.clear();
        self.state = TransactionState::Active;

        tracing::debug!("transaction begun");
        self.notify(AFTER_BEGIN_TRANSACTION, json!({}));
        Ok(())
    }

    /// Record a compensation for the active transaction without running it.
    pub fn add_rollback_action<F>(
        &mut self,
        action: F,
        label: impl Into<String>,
    ) -> TransactionResult<()>
    where
        F: FnOnce() -> Result<(), BoxError> + Send + 'static,
    {
        if self.state != TransactionState::Active {
            return Err(TransactionError::NoTransaction);
        }

        self.rollback_actions.push(PendingAction {
            label: label.into(),
            action: Box::new(action),
        });
        Ok(())
    }

    /// Commit the current transaction: discard the compensations and close.
    pub fn commit(&mut self) -> TransactionResult<()> {
        if self.state != TransactionState::Active {
            return Err(TransactionError::NothingToCommit);
        }

        self.notify(BEFORE_COMMIT, json!({}));

        self.rollback_actions.clear();
        self.graph = None;
        self.state = TransactionState::Idle;

        tracing::debug!("transaction committed");
        self.notify(AFTER_COMMIT, json!({}));
        Ok(())
    }

    /// Roll back the current transaction.
    ///
    /// Every compensation runs, newest first. A failing one (error or panic)
    /// is recorded and the rest still run; the transaction always ends Idle.
    /// Returns the failures, empty when every compensation succeeded.
    pub fn rollback(&mut self) -> TransactionResult<Vec<CompensationFailure>> {
        if self.state != TransactionState::Active {
            return Err(TransactionError::NothingToRollback);
        }

        self.notify(BEFORE_ROLLBACK, json!({}));

        let mut failures = Vec::new();
        while let Some(PendingAction { label, action }) = self.rollback_actions.pop() {
            if let Err(message) = run_guarded(action) {
                tracing::warn!(action = %label, %message, "rollback action failed");
                failures.push(CompensationFailure { label, message });
            }
        }

        self.graph = None;
        self.state = TransactionState::Idle;

        tracing::debug!(failures = failures.len(), "transaction rolled back");
        self.notify(AFTER_ROLLBACK, json!({ "failures": failures.len() }));
        Ok(failures)
    }

    /// Run `operation` inside a transaction.
    ///
    /// Commits and returns the value when the operation succeeds. When it
    /// fails, rolls back and returns the operation's own error untouched.
    /// A panic in the operation also rolls back before it continues.
    pub fn with_transaction<T, E, F>(&mut self, operation: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<TransactionError>,
    {
        self.begin_transaction()?;

        match panic::catch_unwind(AssertUnwindSafe(|| operation(self))) {
            Ok(Ok(value)) => {
                self.commit()?;
                Ok(value)
            }
            Ok(Err(e)) => {
                self.rollback_after_failure();
                Err(e)
            }
            Err(payload) => {
                self.rollback_after_failure();
                panic::resume_unwind(payload)
            }
        }
    }

    fn rollback_after_failure(&mut self) {
        // The operation may already have closed the transaction itself.
        if !self.is_in_transaction() {
            return;
        }
        if let Ok(failures) = self.rollback() {
            if !failures.is_empty() {
                tracing::warn!(failures = failures.len(), "rollback completed with failures");
            }
        }
    }

    fn notify(&self, event: &str, payload: Value) {
        self.events.notify(event, &payload);
    }
}

impl fmt::Debug for TransactionCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionCoordinator")
            .field("state", &self.state)
            .field("pending_actions", &self.rollback_actions.len())
            .finish()
    }
}
