//! Persisted record encoding.
//!
//! Each line of the backing file is one self-describing JSON object whose
//! `type` field says whether it holds a node or an edge.

use serde::{Deserialize, Serialize};

use crate::{Edge, Node};

/// One persisted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Node(Node),
    Edge(Edge),
}

impl Record {
    /// Encode as a single JSON line (no trailing newline).
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode one JSON line.
    pub fn decode(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

impl From<Node> for Record {
    fn from(node: Node) -> Self {
        Record::Node(node)
    }
}

impl From<Edge> for Record {
    fn from(edge: Edge) -> Self {
        Record::Edge(edge)
    }
}
