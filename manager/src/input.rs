//! Decoding of raw JSON tool input.
//!
//! Every element is shape-checked by the validator before it is decoded, so
//! a malformed request fails with the validator's message rather than a
//! serde one.

use mnemo_core::{Edge, EdgeKey, Node};
use mnemo_validator::{
    validate_edge_properties, validate_node_name_property, validate_node_names_array,
    validate_node_properties, ValidationError, ValidationResult,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ManagerResult;
use crate::types::NodeUpdate;

fn items(value: &Value) -> ManagerResult<&[Value]> {
    value.as_array().map(Vec::as_slice).ok_or_else(|| {
        ValidationError::NotAnArray {
            value: value.to_string(),
        }
        .into()
    })
}

fn decode_each<T, C>(value: &Value, check: C) -> ManagerResult<Vec<T>>
where
    T: DeserializeOwned,
    C: Fn(&Value) -> ValidationResult,
{
    items(value)?
        .iter()
        .map(|item| -> ManagerResult<T> {
            check(item)?;
            Ok(T::deserialize(item)?)
        })
        .collect()
}

/// Decode an array of node objects (`name`, `nodeType`, `metadata`).
pub fn nodes_from_value(value: &Value) -> ManagerResult<Vec<Node>> {
    decode_each(value, validate_node_properties)
}

/// Decode an array of partial node updates, each naming its node.
pub fn node_updates_from_value(value: &Value) -> ManagerResult<Vec<NodeUpdate>> {
    decode_each(value, validate_node_name_property)
}

/// Decode an array of node names.
pub fn node_names_from_value(value: &Value) -> ManagerResult<Vec<String>> {
    validate_node_names_array(value)?;
    Ok(Vec::<String>::deserialize(value)?)
}

/// Decode an array of edge objects (`from`, `to`, `edgeType`, optional `weight`).
pub fn edges_from_value(value: &Value) -> ManagerResult<Vec<Edge>> {
    decode_each(value, validate_edge_properties)
}

/// Decode an array of edge identifiers.
///
/// Each element is either a `from|to|edgeType` string or an object with
/// those three fields.
pub fn edge_keys_from_value(value: &Value) -> ManagerResult<Vec<EdgeKey>> {
    items(value)?
        .iter()
        .map(|item| -> ManagerResult<EdgeKey> {
            match item {
                Value::String(id) => Ok(id.parse::<EdgeKey>()?),
                _ => {
                    validate_edge_properties(item)?;
                    Ok(EdgeKey::deserialize(item)?)
                }
            }
        })
        .collect()
}
