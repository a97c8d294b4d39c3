//! Edge records and their composite identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Weight assigned to an edge when none is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Separator between the parts of a composite edge identifier.
pub const KEY_SEPARATOR: char = '|';

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A directed, typed relationship between two nodes.
///
/// Edges are identified by `(from, to, edge_type)`; the weight is payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Name of the source node.
    pub from: String,
    /// Name of the target node.
    pub to: String,
    /// Relationship type (e.g. "knows").
    pub edge_type: String,
    /// Strength of the relationship, expected in `[0, 1]`.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Edge {
    /// Create an edge with the default weight.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Builder-style setter for the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// The composite identity of this edge.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.from, &self.to, &self.edge_type)
    }

    /// Check whether this edge has the given identity.
    pub fn matches(&self, key: &EdgeKey) -> bool {
        self.from == key.from && self.to == key.to && self.edge_type == key.edge_type
    }

    /// Check whether either endpoint is the given node.
    pub fn touches(&self, name: &str) -> bool {
        self.from == name || self.to == name
    }
}

/// Composite edge identifier, rendered as `from|to|edgeType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeKey {
    pub from: String,
    pub to: String,
    pub edge_type: String,
}

impl EdgeKey {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.from,
            self.to,
            self.edge_type,
            sep = KEY_SEPARATOR
        )
    }
}

impl FromStr for EdgeKey {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        match parts.as_slice() {
            [from, to, edge_type] => Ok(EdgeKey::new(*from, *to, *edge_type)),
            _ => Err(GraphError::invalid_edge_key(s)),
        }
    }
}

impl From<&Edge> for EdgeKey {
    fn from(edge: &Edge) -> Self {
        edge.key()
    }
}
