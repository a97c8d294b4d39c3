//! Mnemo integration test support.
//!
//! A [`Fixture`] is a file-backed session in a scratch directory, with
//! helpers for reading and planting the raw JSON Lines content.

pub mod fixture;

pub mod prelude {
    pub use crate::fixture::Fixture;
    pub use mnemo_core::{Edge, EdgeKey, Graph, Node, Record};
    pub use mnemo_events::*;
    pub use mnemo_manager::{EdgeFilter, EdgeUpdate, ManagerError, NodeUpdate};
    pub use mnemo_session::{MemorySession, SessionConfig};
    pub use mnemo_store::{GraphStore, StoreConfig};
    pub use mnemo_transaction::{TransactionCoordinator, TransactionError};
    pub use serde_json::json;
}
