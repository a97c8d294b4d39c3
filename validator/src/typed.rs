//! Checks against typed records and graph snapshots.

use std::collections::HashSet;

use mnemo_core::{Edge, EdgeKey, Graph, Node};

use crate::error::{ValidationError, ValidationResult};

pub(crate) const NODE_NAME_MISSING: &str = "Node must have a 'name' property";
pub(crate) const NODE_TYPE_MISSING: &str = "Node must have a 'nodeType' property";
pub(crate) const NODE_METADATA_MISSING: &str = "Node must have a 'metadata' array";
pub(crate) const EDGE_FROM_MISSING: &str = "Edge must have a 'from' property";
pub(crate) const EDGE_TO_MISSING: &str = "Edge must have a 'to' property";
pub(crate) const EDGE_TYPE_MISSING: &str = "Edge must have an 'edgeType' property";

// ========== Existence ==========

/// Fails unless a node with `name` is present.
pub fn validate_node_exists(graph: &Graph, name: &str) -> ValidationResult {
    if graph.contains_node(name) {
        Ok(())
    } else {
        Err(ValidationError::node_not_found(name))
    }
}

/// Fails if a node with `name` is already present.
pub fn validate_node_does_not_exist(graph: &Graph, name: &str) -> ValidationResult {
    if graph.contains_node(name) {
        Err(ValidationError::node_already_exists(name))
    } else {
        Ok(())
    }
}

/// Fails if an edge with the same `(from, to, edgeType)` is present.
///
/// Edges between the same endpoints with a different type are allowed.
pub fn validate_edge_uniqueness(graph: &Graph, edge: &Edge) -> ValidationResult {
    if graph.contains_edge(&edge.key()) {
        Err(ValidationError::edge_already_exists(
            &edge.from,
            &edge.to,
            &edge.edge_type,
        ))
    } else {
        Ok(())
    }
}

/// Fails on the first edge endpoint that names a missing node.
pub fn validate_edge_references(graph: &Graph, edges: &[Edge]) -> ValidationResult {
    for edge in edges {
        validate_node_exists(graph, &edge.from)?;
        validate_node_exists(graph, &edge.to)?;
    }
    Ok(())
}

// ========== Properties ==========

/// Fails unless `weight` lies in `[0, 1]`. NaN is out of range.
pub fn validate_weight(weight: f64) -> ValidationResult {
    if (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(ValidationError::WeightOutOfRange { weight })
    }
}

/// Check that a node has a non-empty name and type.
pub fn validate_node(node: &Node) -> ValidationResult {
    if node.name.is_empty() {
        return Err(ValidationError::invalid_property(NODE_NAME_MISSING));
    }
    if node.node_type.is_empty() {
        return Err(ValidationError::invalid_property(NODE_TYPE_MISSING));
    }
    Ok(())
}

/// Check that an edge has non-empty endpoints and type and a valid weight.
pub fn validate_edge(edge: &Edge) -> ValidationResult {
    if edge.from.is_empty() {
        return Err(ValidationError::invalid_property(EDGE_FROM_MISSING));
    }
    if edge.to.is_empty() {
        return Err(ValidationError::invalid_property(EDGE_TO_MISSING));
    }
    if edge.edge_type.is_empty() {
        return Err(ValidationError::invalid_property(EDGE_TYPE_MISSING));
    }
    validate_weight(edge.weight)
}

// ========== Whole graph ==========

/// Check every structural invariant of a snapshot.
///
/// Node properties and unique names, edge properties, edge references and
/// unique edge identities.
pub fn validate_graph(graph: &Graph) -> ValidationResult {
    let mut names = HashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        validate_node(node)?;
        if !names.insert(node.name.as_str()) {
            return Err(ValidationError::duplicate_node_name(&node.name));
        }
    }

    let mut keys: HashSet<EdgeKey> = HashSet::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        validate_edge(edge)?;
        if !keys.insert(edge.key()) {
            return Err(ValidationError::edge_already_exists(
                &edge.from,
                &edge.to,
                &edge.edge_type,
            ));
        }
    }

    validate_edge_references(graph, &graph.edges)
}
