//! Mnemo Store
//!
//! Durable JSON Lines persistence for the memory graph.
//!
//! Responsibilities:
//! - Lazily create the backing directory and file
//! - Decode the whole file into a graph snapshot, skipping corrupt lines
//! - Encode and overwrite the whole file on save
//! - Maintain a derived edge index for identifier lookups

mod backend;
mod config;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::{StoreConfig, DEFAULT_DIR, DEFAULT_FILE_NAME, ENV_MEMORY_DIR, ENV_MEMORY_FILE};
pub use error::{StoreError, StoreResult};
pub use store::GraphStore;
