//! Checks against raw tool input.
//!
//! Callers of the memory tools hand over loosely-typed JSON. These checks
//! run before that input is turned into records, so they report the shape
//! problem instead of a generic decode failure.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::typed::{
    validate_weight, EDGE_FROM_MISSING, EDGE_TO_MISSING, EDGE_TYPE_MISSING, NODE_METADATA_MISSING,
    NODE_NAME_MISSING, NODE_TYPE_MISSING,
};

fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn require_str<'a>(value: &'a Value, field: &str, message: &str) -> ValidationResult<&'a str> {
    non_empty_str(value, field).ok_or_else(|| ValidationError::invalid_property(message))
}

/// Check that a raw node has `name`, `nodeType` and a `metadata` array.
pub fn validate_node_properties(node: &Value) -> ValidationResult {
    require_str(node, "name", NODE_NAME_MISSING)?;
    require_str(node, "nodeType", NODE_TYPE_MISSING)?;
    if !node.get("metadata").is_some_and(Value::is_array) {
        return Err(ValidationError::invalid_property(NODE_METADATA_MISSING));
    }
    Ok(())
}

/// Check that a partial node update names the node it applies to.
pub fn validate_node_name_property(node: &Value) -> ValidationResult {
    match non_empty_str(node, "name") {
        Some(_) => Ok(()),
        None => Err(ValidationError::NodeNameRequired),
    }
}

/// Check that `value` is an array of strings. An empty array is valid.
pub fn validate_node_names_array(value: &Value) -> ValidationResult {
    let Some(items) = value.as_array() else {
        return Err(ValidationError::NotAnArray {
            value: value.to_string(),
        });
    };
    if items.iter().all(Value::is_string) {
        Ok(())
    } else {
        Err(ValidationError::NonStringNodeName)
    }
}

/// Check that a raw edge has `from`, `to`, `edgeType`, and a valid weight
/// when one is given.
pub fn validate_edge_properties(edge: &Value) -> ValidationResult {
    require_str(edge, "from", EDGE_FROM_MISSING)?;
    require_str(edge, "to", EDGE_TO_MISSING)?;
    require_str(edge, "edgeType", EDGE_TYPE_MISSING)?;

    match edge.get("weight") {
        None | Some(Value::Null) => Ok(()),
        Some(weight) => {
            let weight = weight.as_f64().ok_or(ValidationError::WeightNotANumber)?;
            validate_weight(weight)
        }
    }
}

/// Check a raw graph object: both collections present as arrays, every node
/// well-formed, every edge well-formed and pointing at a listed node.
pub fn validate_graph_structure(graph: &Value) -> ValidationResult {
    let nodes = graph
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::invalid_graph("Graph must have a 'nodes' array"))?;
    let edges = graph
        .get("edges")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::invalid_graph("Graph must have an 'edges' array"))?;

    for node in nodes {
        validate_node_properties(node)?;
    }

    let names: HashSet<&str> = nodes
        .iter()
        .filter_map(|n| n.get("name").and_then(Value::as_str))
        .collect();

    for edge in edges {
        validate_edge_properties(edge)?;
        for field in ["from", "to"] {
            let name = edge.get(field).and_then(Value::as_str).unwrap_or_default();
            if !names.contains(name) {
                return Err(ValidationError::node_not_found(name));
            }
        }
    }

    Ok(())
}
