//! Mnemo Validator
//!
//! Structural and referential checks over graph data.
//!
//! Responsibilities:
//! - Gate mutations before anything is persisted
//! - Check raw tool input for the fields nodes and edges need
//! - Check existence, uniqueness and reference integrity against a snapshot
//! - Produce specific, human-readable failure messages

mod error;
mod raw;
mod typed;

pub use error::{ValidationError, ValidationResult};
pub use raw::{
    validate_edge_properties, validate_graph_structure, validate_node_name_property,
    validate_node_names_array, validate_node_properties,
};
pub use typed::{
    validate_edge, validate_edge_references, validate_edge_uniqueness, validate_graph,
    validate_node, validate_node_does_not_exist, validate_node_exists, validate_weight,
};
