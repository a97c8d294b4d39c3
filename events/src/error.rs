//! Event error types.

use thiserror::Error;

/// Event dispatch errors.
#[derive(Debug, Error)]
pub enum EventError {
    /// One or more listeners failed while an event was dispatched.
    ///
    /// Every listener still ran; this summarizes all failures.
    #[error("{} listener(s) failed for event '{event}': {}", .failures.len(), .failures.join("; "))]
    ListenerFailures { event: String, failures: Vec<String> },
}

impl EventError {
    pub fn listener_failures(event: impl Into<String>, failures: Vec<String>) -> Self {
        Self::ListenerFailures {
            event: event.into(),
            failures,
        }
    }

    /// The individual failure messages.
    pub fn failures(&self) -> &[String] {
        match self {
            Self::ListenerFailures { failures, .. } => failures,
        }
    }
}

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;
