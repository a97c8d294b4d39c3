//! Memory session.

use std::sync::Arc;

use mnemo_core::Graph;
use mnemo_events::{EventNotifier, Subscription, ALL_EVENTS};
use mnemo_manager::{EdgeManager, NodeManager};
use mnemo_store::{GraphStore, StorageBackend};
use mnemo_transaction::TransactionCoordinator;

use crate::config::SessionConfig;
use crate::error::SessionResult;

/// One store, one notifier and one transaction coordinator, wired together.
///
/// The coordinator is owned here rather than shared globally, so every
/// operation that goes through this session sees the same single-transaction
/// guard.
pub struct MemorySession {
    store: Arc<GraphStore>,
    events: EventNotifier,
    txn: TransactionCoordinator,
    event_log: Vec<Subscription>,
}

impl MemorySession {
    /// Open a file-backed session and make sure its storage exists.
    pub fn open(config: SessionConfig) -> SessionResult<Self> {
        let store = GraphStore::open(&config.store);
        store.ensure_ready()?;
        tracing::debug!(path = %config.store.path().display(), "memory session opened");
        Ok(Self::from_store(store, config.log_events))
    }

    /// Create a session over any backend.
    pub fn with_backend(backend: impl StorageBackend + 'static, log_events: bool) -> Self {
        Self::from_store(GraphStore::new(backend), log_events)
    }

    fn from_store(store: GraphStore, log_events: bool) -> Self {
        let store = Arc::new(store);
        let events = EventNotifier::new();
        let txn = TransactionCoordinator::new(Arc::clone(&store), events.clone());
        let mut session = Self {
            store,
            events,
            txn,
            event_log: Vec::new(),
        };
        session.set_event_logging(log_events);
        session
    }

    /// The shared store.
    pub fn store(&self) -> &Arc<GraphStore> {
        &self.store
    }

    /// The shared notifier. Observers subscribe here.
    pub fn events(&self) -> &EventNotifier {
        &self.events
    }

    /// The session's transaction coordinator.
    pub fn coordinator(&mut self) -> &mut TransactionCoordinator {
        &mut self.txn
    }

    /// Node operations.
    pub fn nodes(&mut self) -> NodeManager<'_> {
        NodeManager::new(&mut self.txn)
    }

    /// Edge operations.
    pub fn edges(&mut self) -> EdgeManager<'_> {
        EdgeManager::new(&mut self.txn)
    }

    /// Load the whole persisted graph.
    pub fn read_graph(&self) -> SessionResult<Graph> {
        Ok(self.store.load()?)
    }

    /// Whether notifications are being logged.
    pub fn is_logging_events(&self) -> bool {
        !self.event_log.is_empty()
    }

    /// Turn debug logging of every notification on or off.
    pub fn set_event_logging(&mut self, enabled: bool) {
        if enabled == self.is_logging_events() {
            return;
        }
        if enabled {
            self.event_log = ALL_EVENTS
                .iter()
                .map(|&event| {
                    self.events.on(event, move |payload| {
                        tracing::debug!(event, %payload, "graph event");
                        Ok(())
                    })
                })
                .collect();
        } else {
            for subscription in self.event_log.drain(..) {
                subscription.unsubscribe();
            }
        }
    }
}

impl std::fmt::Debug for MemorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySession")
            .field("store", &self.store)
            .field("transaction", &self.txn)
            .field("logging_events", &self.is_logging_events())
            .finish()
    }
}
