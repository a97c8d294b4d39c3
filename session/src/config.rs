//! Session configuration.

use std::env;

use mnemo_store::StoreConfig;

/// Environment variable enabling debug logging of every notification.
pub const ENV_LOG_EVENTS: &str = "MNEMO_LOG_EVENTS";

/// Everything a [`MemorySession`](crate::MemorySession) needs to open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the graph is persisted.
    pub store: StoreConfig,
    /// Log every notification at debug level.
    pub log_events: bool,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store settings from `MNEMO_MEMORY_DIR` / `MNEMO_MEMORY_FILE`, event
    /// logging from `MNEMO_LOG_EVENTS` (`1` or `true`).
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
            log_events: env::var(ENV_LOG_EVENTS).is_ok_and(|v| parse_flag(&v)),
        }
    }

    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    pub fn with_log_events(mut self, log_events: bool) -> Self {
        self.log_events = log_events;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
