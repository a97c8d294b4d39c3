//! Request and outcome types for manager operations.

use mnemo_core::{Edge, EdgeKey, Node};
use serde::{Deserialize, Serialize};

/// Partial update of one node, identified by name.
///
/// Fields left as `None` keep their current value. A given `metadata`
/// replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<String>>,
}

impl NodeUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_metadata<I, S>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = Some(metadata.into_iter().map(Into::into).collect());
        self
    }

    /// Apply this update to `node` in place.
    pub fn apply(&self, node: &mut Node) {
        if let Some(node_type) = &self.node_type {
            node.node_type.clone_from(node_type);
        }
        if let Some(metadata) = &self.metadata {
            node.metadata.clone_from(metadata);
        }
    }
}

/// Update of one edge, identified by its composite key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeUpdate {
    pub from: String,
    pub to: String,
    pub edge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl EdgeUpdate {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// The identity of the edge this update targets.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.from, &self.to, &self.edge_type)
    }
}

/// Criteria for selecting edges. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeFilter {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub edge_type: Option<String>,
}

impl EdgeFilter {
    /// A filter matching every edge.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn from_node(mut self, name: impl Into<String>) -> Self {
        self.from = Some(name.into());
        self
    }

    pub fn to_node(mut self, name: impl Into<String>) -> Self {
        self.to = Some(name.into());
        self
    }

    pub fn of_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    /// Check whether `edge` satisfies every set criterion.
    pub fn matches(&self, edge: &Edge) -> bool {
        fn field_matches(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map_or(true, |w| w == have)
        }

        field_matches(&self.from, &edge.from)
            && field_matches(&self.to, &edge.to)
            && field_matches(&self.edge_type, &edge.edge_type)
    }
}

/// What a node deletion removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeletedNodes {
    /// The deleted nodes.
    pub nodes: Vec<Node>,
    /// Edges removed because they touched a deleted node.
    pub edges: Vec<Edge>,
}
