//! In-memory graph snapshot.

use serde::{Deserialize, Serialize};

use crate::{Edge, EdgeKey, Node};

/// A complete set of nodes and edges, loaded and saved as a whole.
///
/// The snapshot does not enforce any invariant by itself; callers gate
/// mutations through the validator before touching it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// All nodes, in load order.
    pub nodes: Vec<Node>,
    /// All edges, in load order.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from its parts.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    // ==================== Node Access ====================

    /// Find a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Find a node by name, mutably.
    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    /// Check whether a node with the given name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// Remove the named nodes together with every edge touching them.
    ///
    /// Returns the removed nodes and edges.
    pub fn remove_nodes(&mut self, names: &[String]) -> (Vec<Node>, Vec<Edge>) {
        let (removed_nodes, kept_nodes): (Vec<Node>, Vec<Node>) = std::mem::take(&mut self.nodes)
            .into_iter()
            .partition(|n| names.contains(&n.name));
        let (removed_edges, kept_edges): (Vec<Edge>, Vec<Edge>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|e| names.iter().any(|name| e.touches(name)));

        self.nodes = kept_nodes;
        self.edges = kept_edges;
        (removed_nodes, removed_edges)
    }

    // ==================== Edge Access ====================

    /// Find an edge by its composite identity.
    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.iter().find(|e| e.matches(key))
    }

    /// Find an edge by its composite identity, mutably.
    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.matches(key))
    }

    /// Check whether an edge with the given identity exists.
    pub fn contains_edge(&self, key: &EdgeKey) -> bool {
        self.edge(key).is_some()
    }

    /// Remove an edge by identity, returning it if it was present.
    pub fn remove_edge(&mut self, key: &EdgeKey) -> Option<Edge> {
        let pos = self.edges.iter().position(|e| e.matches(key))?;
        Some(self.edges.remove(pos))
    }

    /// Edges whose source is the given node.
    pub fn edges_from<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == name)
    }

    /// Edges whose target is the given node.
    pub fn edges_to<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.to == name)
    }

    /// Edges with the given node at either end.
    pub fn edges_touching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(name))
    }

    // ==================== Statistics ====================

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
