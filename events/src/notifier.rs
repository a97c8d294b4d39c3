//! Listener registry and dispatch.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use mnemo_core::{run_guarded, BoxError};
use serde_json::Value;

use crate::error::{EventError, EventResult};

/// A shared event listener.
///
/// Listeners receive the payload object and may fail; a failure does not
/// stop the remaining listeners from running.
pub type Listener = Arc<dyn Fn(&Value) -> Result<(), BoxError> + Send + Sync>;

/// One registration of a listener under an event name.
#[derive(Clone)]
struct Registration {
    id: u64,
    listener: Listener,
    once: bool,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    events: BTreeMap<String, Vec<Registration>>,
}

impl Registry {
    fn insert(&mut self, event: &str, listener: Listener, once: bool) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.events
            .entry(event.to_string())
            .or_default()
            .push(Registration { id, listener, once });
        id
    }

    fn remove_where(&mut self, event: &str, pred: impl Fn(&Registration) -> bool) -> bool {
        let Some(list) = self.events.get_mut(event) else {
            return false;
        };
        let removed = match list.iter().position(pred) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        };
        self.prune(event);
        removed
    }

    fn prune(&mut self, event: &str) {
        if self.events.get(event).is_some_and(Vec::is_empty) {
            self.events.remove(event);
        }
    }
}

/// Synchronous publish/subscribe facility.
///
/// Cloning a notifier yields another handle to the same registry, so the
/// transaction coordinator, the managers and any observers can share one.
#[derive(Clone, Default)]
pub struct EventNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl EventNotifier {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========== Registration ==========

    /// Register a listener closure for an event.
    pub fn on<F>(&self, event: &str, listener: F) -> Subscription
    where
        F: Fn(&Value) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.add_listener(event, Arc::new(listener))
    }

    /// Register a shared listener for an event.
    ///
    /// Keep a clone of the listener to remove it later with [`off`](Self::off).
    pub fn add_listener(&self, event: &str, listener: Listener) -> Subscription {
        let id = self.lock().insert(event, listener, false);
        self.subscription(event, id)
    }

    /// Register a listener that removes itself before its first invocation.
    pub fn once<F>(&self, event: &str, listener: F) -> Subscription
    where
        F: Fn(&Value) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let id = self.lock().insert(event, Arc::new(listener), true);
        self.subscription(event, id)
    }

    /// Remove one registration of `listener` from `event`.
    ///
    /// Does nothing if the event or the listener is not registered.
    pub fn off(&self, event: &str, listener: &Listener) {
        self.lock()
            .remove_where(event, |r| Arc::ptr_eq(&r.listener, listener));
    }

    /// Remove every listener of one event, or of all events.
    pub fn remove_all_listeners(&self, event: Option<&str>) {
        let mut registry = self.lock();
        match event {
            Some(event) => {
                registry.events.remove(event);
            }
            None => registry.events.clear(),
        }
    }

    fn subscription(&self, event: &str, id: u64) -> Subscription {
        Subscription {
            registry: Arc::downgrade(&self.registry),
            event: event.to_string(),
            id,
        }
    }

    // ========== Dispatch ==========

    /// Invoke every listener registered for `event`, in registration order.
    ///
    /// Dispatch runs over a copy of the listener list taken up front, so
    /// listeners may subscribe or unsubscribe while it runs. Returns whether
    /// any listener was invoked. If listeners fail, all of them still run
    /// and one aggregated error is returned afterwards.
    pub fn emit(&self, event: &str, payload: &Value) -> EventResult<bool> {
        let snapshot = {
            let mut registry = self.lock();
            let Some(list) = registry.events.get_mut(event) else {
                return Ok(false);
            };
            let snapshot = list.clone();
            list.retain(|r| !r.once);
            registry.prune(event);
            snapshot
        };

        if snapshot.is_empty() {
            return Ok(false);
        }

        let mut failures = Vec::new();
        for registration in &snapshot {
            let listener = &registration.listener;
            if let Err(message) = run_guarded(|| listener(payload)) {
                tracing::warn!(
                    event,
                    listener = registration.id,
                    %message,
                    "event listener failed"
                );
                failures.push(message);
            }
        }

        if failures.is_empty() {
            Ok(true)
        } else {
            Err(EventError::listener_failures(event, failures))
        }
    }

    /// Emit `event` where listener failures must not change the outcome.
    ///
    /// Failures are logged at warn and otherwise dropped.
    pub fn notify(&self, event: &str, payload: &Value) {
        if let Err(e) = self.emit(event, payload) {
            tracing::warn!(
                event,
                failures = e.failures().len(),
                "notification had failing listeners"
            );
        }
    }

    // ========== Introspection ==========

    /// Number of listeners registered for an event.
    pub fn listener_count(&self, event: &str) -> usize {
        self.lock().events.get(event).map_or(0, Vec::len)
    }

    /// Names of events that have at least one listener, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.lock().events.keys().cloned().collect()
    }

    /// A copy of the listeners registered for an event.
    pub fn listeners(&self, event: &str) -> Vec<Listener> {
        self.lock()
            .events
            .get(event)
            .map(|list| list.iter().map(|r| Arc::clone(&r.listener)).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for EventNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNotifier")
            .field("events", &self.event_names())
            .finish()
    }
}

/// Handle to exactly one listener registration.
///
/// Dropping the handle leaves the listener registered.
#[derive(Debug, Clone)]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    event: String,
    id: u64,
}

impl Subscription {
    /// The event this registration belongs to.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Remove the registration. Returns false if it was already gone
    /// (removed, fired as `once`, or the notifier was dropped).
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.remove_where(&self.event, |r| r.id == self.id)
    }
}
