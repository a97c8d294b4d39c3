//! Node records.

use serde::{Deserialize, Serialize};

/// A named entity in the memory graph.
///
/// The name is the node's identity: it is unique across a graph and is what
/// edges refer to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique name of this node.
    pub name: String,
    /// Free-form type label (e.g. "person", "project").
    pub node_type: String,
    /// Ordered free-text observations about the node.
    #[serde(default)]
    pub metadata: Vec<String>,
}

impl Node {
    /// Create a node with no metadata.
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
            metadata: Vec::new(),
        }
    }

    /// Builder-style setter for the metadata list.
    pub fn with_metadata<I, S>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = metadata.into_iter().map(Into::into).collect();
        self
    }
}
