//! Mnemo Core Types
//!
//! This crate provides the data model shared by every Mnemo component:
//! - Entity records (Node, Edge)
//! - The composite edge identifier (EdgeKey)
//! - The in-memory graph snapshot (Graph)
//! - The tagged persisted record (Record)
//! - Failure normalization for callbacks
//! - Common error types

mod edge;
mod error;
mod fault;
mod graph;
mod node;
mod record;

pub use edge::*;
pub use error::*;
pub use fault::*;
pub use graph::*;
pub use node::*;
pub use record::*;
