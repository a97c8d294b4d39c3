//! Mnemo Events
//!
//! Synchronous publish/subscribe used to announce before/after lifecycle
//! points of every graph operation.
//!
//! Responsibilities:
//! - Register and remove listeners per event name
//! - Dispatch in registration order over a snapshot of the listener list
//! - Isolate listener failures and report them as one aggregated error

mod error;
mod names;
mod notifier;

pub use error::{EventError, EventResult};
pub use names::*;
pub use notifier::{EventNotifier, Listener, Subscription};
