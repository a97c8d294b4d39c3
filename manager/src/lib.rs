//! Mnemo Manager
//!
//! Node and edge operations over the transaction core.
//!
//! Responsibilities:
//! - Gate every mutation through the validator before touching the snapshot
//! - Run each mutation inside one transaction with a restoring compensation
//! - Persist the mutated snapshot before the transaction commits
//! - Announce before/after notifications for every mutation
//!
//! # Module Structure
//!
//! - `node` - NodeManager (add/update/delete/get nodes)
//! - `edge` - EdgeManager (add/update/delete/get edges)
//! - `input` - Decoding of raw JSON tool input, validated first
//! - `types` - Update and filter request types, deletion outcome
//! - `error` - Error types for manager failures

mod edge;
mod error;
mod input;
mod node;
mod types;

pub use edge::EdgeManager;
pub use error::{ManagerError, ManagerResult};
pub use input::{
    edge_keys_from_value, edges_from_value, node_names_from_value, node_updates_from_value,
    nodes_from_value,
};
pub use node::NodeManager;
pub use types::{DeletedNodes, EdgeFilter, EdgeUpdate, NodeUpdate};

use std::sync::Arc;

use mnemo_core::Graph;
use mnemo_transaction::TransactionCoordinator;

/// Register a compensation that writes `previous` back, then persist the
/// working snapshot.
///
/// Shared by every mutation: once this returns, the new snapshot is on disk
/// and a rollback restores the old one.
pub(crate) fn persist(
    txn: &mut TransactionCoordinator,
    previous: Graph,
    label: &str,
) -> ManagerResult<()> {
    let store = Arc::clone(txn.store());
    let restore = Arc::clone(&store);
    txn.add_rollback_action(move || Ok(restore.save(&previous)?), label)?;
    store.save(txn.graph_mut()?)?;
    Ok(())
}
