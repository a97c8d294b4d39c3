//! Edge operations.

use std::collections::HashSet;

use mnemo_core::{Edge, EdgeKey};
use mnemo_events::{
    AFTER_ADD_EDGES, AFTER_DELETE_EDGES, AFTER_UPDATE_EDGES, BEFORE_ADD_EDGES,
    BEFORE_DELETE_EDGES, BEFORE_UPDATE_EDGES,
};
use mnemo_transaction::TransactionCoordinator;
use mnemo_validator::{
    validate_edge, validate_edge_references, validate_edge_uniqueness, validate_weight,
    ValidationError,
};
use serde_json::json;

use crate::error::ManagerResult;
use crate::persist;
use crate::types::{EdgeFilter, EdgeUpdate};

/// Edge manager.
pub struct EdgeManager<'t> {
    txn: &'t mut TransactionCoordinator,
}

impl<'t> EdgeManager<'t> {
    /// Create a new edge manager.
    pub fn new(txn: &'t mut TransactionCoordinator) -> Self {
        Self { txn }
    }

    /// Add new edges between existing nodes.
    ///
    /// Fails without changing anything if an edge is malformed, points at a
    /// missing node, or repeats an existing or batched identity.
    pub fn add_edges(&mut self, edges: Vec<Edge>) -> ManagerResult<Vec<Edge>> {
        let events = self.txn.events().clone();
        events.notify(BEFORE_ADD_EDGES, &json!({ "edges": &edges }));

        let added = self.txn.with_transaction(|txn| -> ManagerResult<Vec<Edge>> {
            let graph = txn.graph_mut()?;

            for edge in &edges {
                validate_edge(edge)?;
            }
            validate_edge_references(graph, &edges)?;

            let mut batch = HashSet::with_capacity(edges.len());
            for edge in &edges {
                validate_edge_uniqueness(graph, edge)?;
                if !batch.insert(edge.key()) {
                    return Err(ValidationError::edge_already_exists(
                        &edge.from,
                        &edge.to,
                        &edge.edge_type,
                    )
                    .into());
                }
            }

            let previous = graph.clone();
            graph.edges.extend(edges.iter().cloned());
            persist(txn, previous, "restore graph after add_edges")?;
            Ok(edges)
        })?;

        tracing::debug!(count = added.len(), "edges added");
        events.notify(AFTER_ADD_EDGES, &json!({ "edges": &added }));
        Ok(added)
    }

    /// Change the weight of existing edges.
    ///
    /// Returns the edges as they are after the update.
    pub fn update_edges(&mut self, updates: Vec<EdgeUpdate>) -> ManagerResult<Vec<Edge>> {
        let events = self.txn.events().clone();
        events.notify(BEFORE_UPDATE_EDGES, &json!({ "updates": &updates }));

        let updated = self.txn.with_transaction(|txn| -> ManagerResult<Vec<Edge>> {
            let graph = txn.graph_mut()?;
            for update in &updates {
                if let Some(weight) = update.weight {
                    validate_weight(weight)?;
                }
            }

            let previous = graph.clone();
            let mut updated = Vec::with_capacity(updates.len());
            for update in &updates {
                let key = update.key();
                let Some(edge) = graph.edge_mut(&key) else {
                    return Err(ValidationError::edge_not_found(key.to_string()).into());
                };
                if let Some(weight) = update.weight {
                    edge.weight = weight;
                }
                updated.push(edge.clone());
            }

            persist(txn, previous, "restore graph after update_edges")?;
            Ok(updated)
        })?;

        tracing::debug!(count = updated.len(), "edges updated");
        events.notify(AFTER_UPDATE_EDGES, &json!({ "edges": &updated }));
        Ok(updated)
    }

    /// Delete edges by identity. Every key must name an existing edge.
    pub fn delete_edges(&mut self, keys: Vec<EdgeKey>) -> ManagerResult<Vec<Edge>> {
        let events = self.txn.events().clone();
        let ids: Vec<String> = keys.iter().map(ToString::to_string).collect();
        events.notify(BEFORE_DELETE_EDGES, &json!({ "ids": &ids }));

        let deleted = self.txn.with_transaction(|txn| -> ManagerResult<Vec<Edge>> {
            let graph = txn.graph_mut()?;
            for key in &keys {
                if !graph.contains_edge(key) {
                    return Err(ValidationError::edge_not_found(key.to_string()).into());
                }
            }

            let previous = graph.clone();
            let deleted: Vec<Edge> = keys.iter().filter_map(|key| graph.remove_edge(key)).collect();
            persist(txn, previous, "restore graph after delete_edges")?;
            Ok(deleted)
        })?;

        tracing::debug!(count = deleted.len(), "edges deleted");
        events.notify(AFTER_DELETE_EDGES, &json!({ "ids": &ids }));
        Ok(deleted)
    }

    /// Edges matching `filter`, in stored order.
    pub fn get_edges(&self, filter: &EdgeFilter) -> ManagerResult<Vec<Edge>> {
        let graph = self.txn.store().load()?;
        Ok(graph
            .edges
            .into_iter()
            .filter(|edge| filter.matches(edge))
            .collect())
    }

    /// Edges for `from|to|edgeType` identifiers, in the order asked.
    /// Unknown identifiers are omitted.
    pub fn get_edges_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> ManagerResult<Vec<Edge>> {
        Ok(self.txn.store().load_edges_by_ids(ids)?)
    }
}
