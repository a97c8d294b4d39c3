//! Node operations.

use std::collections::HashSet;

use mnemo_core::Node;
use mnemo_events::{
    AFTER_ADD_NODES, AFTER_DELETE_NODES, AFTER_UPDATE_NODES, BEFORE_ADD_NODES,
    BEFORE_DELETE_NODES, BEFORE_UPDATE_NODES,
};
use mnemo_transaction::TransactionCoordinator;
use mnemo_validator::{
    validate_node, validate_node_does_not_exist, validate_node_exists, ValidationError,
};
use serde_json::json;

use crate::error::ManagerResult;
use crate::persist;
use crate::types::{DeletedNodes, NodeUpdate};

/// Node manager.
///
/// Borrows the coordinator for the duration of one or more operations; each
/// mutating operation is its own transaction.
pub struct NodeManager<'t> {
    txn: &'t mut TransactionCoordinator,
}

impl<'t> NodeManager<'t> {
    /// Create a new node manager.
    pub fn new(txn: &'t mut TransactionCoordinator) -> Self {
        Self { txn }
    }

    /// Add new nodes.
    ///
    /// Fails without changing anything if a node is malformed, already
    /// exists, or appears twice in the batch.
    pub fn add_nodes(&mut self, nodes: Vec<Node>) -> ManagerResult<Vec<Node>> {
        let events = self.txn.events().clone();
        events.notify(BEFORE_ADD_NODES, &json!({ "nodes": &nodes }));

        let added = self.txn.with_transaction(|txn| -> ManagerResult<Vec<Node>> {
            let graph = txn.graph_mut()?;

            let mut batch = HashSet::with_capacity(nodes.len());
            for node in &nodes {
                validate_node(node)?;
                validate_node_does_not_exist(graph, &node.name)?;
                if !batch.insert(node.name.as_str()) {
                    return Err(ValidationError::duplicate_node_name(&node.name).into());
                }
            }

            let previous = graph.clone();
            graph.nodes.extend(nodes.iter().cloned());
            persist(txn, previous, "restore graph after add_nodes")?;
            Ok(nodes)
        })?;

        tracing::debug!(count = added.len(), "nodes added");
        events.notify(AFTER_ADD_NODES, &json!({ "nodes": &added }));
        Ok(added)
    }

    /// Apply partial updates to existing nodes.
    ///
    /// Returns the nodes as they are after the update.
    pub fn update_nodes(&mut self, updates: Vec<NodeUpdate>) -> ManagerResult<Vec<Node>> {
        let events = self.txn.events().clone();
        events.notify(BEFORE_UPDATE_NODES, &json!({ "updates": &updates }));

        let updated = self.txn.with_transaction(|txn| -> ManagerResult<Vec<Node>> {
            let graph = txn.graph_mut()?;
            for update in &updates {
                validate_node_exists(graph, &update.name)?;
            }

            let previous = graph.clone();
            let mut updated = Vec::with_capacity(updates.len());
            for update in &updates {
                let Some(node) = graph.node_mut(&update.name) else {
                    return Err(ValidationError::node_not_found(&update.name).into());
                };
                update.apply(node);
                validate_node(node)?;
                updated.push(node.clone());
            }

            persist(txn, previous, "restore graph after update_nodes")?;
            Ok(updated)
        })?;

        tracing::debug!(count = updated.len(), "nodes updated");
        events.notify(AFTER_UPDATE_NODES, &json!({ "nodes": &updated }));
        Ok(updated)
    }

    /// Delete nodes by name, together with every edge touching them.
    pub fn delete_nodes(&mut self, names: Vec<String>) -> ManagerResult<DeletedNodes> {
        let events = self.txn.events().clone();
        events.notify(BEFORE_DELETE_NODES, &json!({ "names": &names }));

        let deleted = self.txn.with_transaction(|txn| -> ManagerResult<DeletedNodes> {
            let graph = txn.graph_mut()?;
            for name in &names {
                validate_node_exists(graph, name)?;
            }

            let previous = graph.clone();
            let (nodes, edges) = graph.remove_nodes(&names);
            persist(txn, previous, "restore graph after delete_nodes")?;
            Ok(DeletedNodes { nodes, edges })
        })?;

        tracing::debug!(
            nodes = deleted.nodes.len(),
            edges = deleted.edges.len(),
            "nodes deleted"
        );
        events.notify(
            AFTER_DELETE_NODES,
            &json!({ "names": &names, "deletedEdges": deleted.edges.len() }),
        );
        Ok(deleted)
    }

    /// Look up nodes by name, in the order asked. Unknown names are omitted.
    pub fn get_nodes<S: AsRef<str>>(&self, names: &[S]) -> ManagerResult<Vec<Node>> {
        let graph = self.txn.store().load()?;
        Ok(names
            .iter()
            .filter_map(|name| graph.node(name.as_ref()).cloned())
            .collect())
    }
}
