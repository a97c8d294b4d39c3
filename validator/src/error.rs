//! Validation error types.

use thiserror::Error;

/// Result type for validation checks.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// A failed integrity check.
///
/// The `Display` form is the message reported back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Node not found: {name}")]
    NodeNotFound { name: String },

    #[error("Node already exists: {name}")]
    NodeAlreadyExists { name: String },

    #[error("Duplicate node name: {name}")]
    DuplicateNodeName { name: String },

    #[error("Edge already exists: {from} -> {to} ({edge_type})")]
    EdgeAlreadyExists {
        from: String,
        to: String,
        edge_type: String,
    },

    #[error("Edge not found: {key}")]
    EdgeNotFound { key: String },

    /// A node or edge is missing a field or has it in the wrong shape.
    #[error("{message}")]
    InvalidProperty { message: String },

    #[error("Node name is required")]
    NodeNameRequired,

    #[error("{value} must be an array")]
    NotAnArray { value: String },

    #[error("All node names must be strings")]
    NonStringNodeName,

    #[error("Edge weight must be a number")]
    WeightNotANumber,

    #[error("Edge weight must be between 0 and 1")]
    WeightOutOfRange { weight: f64 },

    /// The graph object itself is malformed.
    #[error("{message}")]
    InvalidGraph { message: String },
}

impl ValidationError {
    pub fn node_not_found(name: impl Into<String>) -> Self {
        Self::NodeNotFound { name: name.into() }
    }

    pub fn node_already_exists(name: impl Into<String>) -> Self {
        Self::NodeAlreadyExists { name: name.into() }
    }

    pub fn duplicate_node_name(name: impl Into<String>) -> Self {
        Self::DuplicateNodeName { name: name.into() }
    }

    pub fn edge_already_exists(
        from: impl Into<String>,
        to: impl Into<String>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self::EdgeAlreadyExists {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
        }
    }

    pub fn edge_not_found(key: impl Into<String>) -> Self {
        Self::EdgeNotFound { key: key.into() }
    }

    pub fn invalid_property(message: impl Into<String>) -> Self {
        Self::InvalidProperty {
            message: message.into(),
        }
    }

    pub fn invalid_graph(message: impl Into<String>) -> Self {
        Self::InvalidGraph {
            message: message.into(),
        }
    }
}
