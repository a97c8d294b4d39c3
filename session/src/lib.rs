//! Mnemo Session
//!
//! Application wiring for the memory graph.
//!
//! Responsibilities:
//! - Build one store, one notifier and one transaction coordinator
//! - Hand out node and edge managers over that coordinator
//! - Read configuration from the environment
//! - Install the tracing subscriber for binaries that embed the core

mod config;
mod error;
pub mod logging;
mod session;

pub use config::{SessionConfig, ENV_LOG_EVENTS};
pub use error::{SessionError, SessionResult};
pub use session::MemorySession;
