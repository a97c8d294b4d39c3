//! JSON Lines graph store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use mnemo_core::{Edge, Graph, Record};

use crate::backend::{FileBackend, StorageBackend};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Loads and saves whole graph snapshots through a [`StorageBackend`].
///
/// The store also keeps an edge index keyed by the composite identifier
/// `from|to|edgeType`. The index is derived: it is rebuilt from scratch on
/// every [`load`](Self::load), which costs O(edges), and is only consulted by
/// [`load_edges_by_ids`](Self::load_edges_by_ids).
pub struct GraphStore {
    backend: Box<dyn StorageBackend>,
    ready: AtomicBool,
    edge_index: Mutex<HashMap<String, Edge>>,
}

impl GraphStore {
    /// Create a store over any backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            ready: AtomicBool::new(false),
            edge_index: Mutex::new(HashMap::new()),
        }
    }

    /// Create a file-backed store from configuration.
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(FileBackend::new(&config.dir, &config.file_name))
    }

    fn index(&self) -> MutexGuard<'_, HashMap<String, Edge>> {
        self.edge_index.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========== Initialization ==========

    /// Make sure the backing storage exists. Only the first successful call
    /// touches the backend.
    pub fn ensure_ready(&self) -> StoreResult<()> {
        if self.ready.load(Ordering::Acquire) {
            return Ok(());
        }

        let created = self
            .backend
            .prepare()
            .map_err(|e| StoreError::initialization(self.backend.location(), e))?;
        if created {
            tracing::info!(path = %self.backend.location().display(), "created graph storage");
        }

        self.ready.store(true, Ordering::Release);
        Ok(())
    }

    // ========== Load ==========

    /// Read the whole backing content into a fresh snapshot.
    ///
    /// Lines that do not decode into a node or edge record are skipped.
    /// Missing storage yields an empty graph.
    pub fn load(&self) -> StoreResult<Graph> {
        self.ensure_ready()?;

        let contents = self
            .backend
            .read()
            .map_err(|e| StoreError::read(self.backend.location(), e))?
            .unwrap_or_default();

        let graph = decode_graph(&contents);
        self.rebuild_index(&graph.edges);

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }

    fn rebuild_index(&self, edges: &[Edge]) {
        let mut index = self.index();
        index.clear();
        for edge in edges {
            index.insert(edge.key().to_string(), edge.clone());
        }
    }

    // ========== Save ==========

    /// Overwrite the backing content with `graph`: every node, then every
    /// edge, one JSON object per line.
    ///
    /// This is a single overwrite, not write-then-rename. A crash in the
    /// middle of the write can leave a truncated file; the next load keeps
    /// every line that still decodes and drops the rest.
    pub fn save(&self, graph: &Graph) -> StoreResult<()> {
        self.ensure_ready()?;

        let contents = encode_graph(graph)?;
        self.backend
            .write(&contents)
            .map_err(|e| StoreError::write(self.backend.location(), e))?;

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "saved graph"
        );
        Ok(())
    }

    // ========== Lookup ==========

    /// Load the graph and return the edges whose composite identifiers are
    /// listed, in the order requested. Unknown identifiers are left out.
    pub fn load_edges_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> StoreResult<Vec<Edge>> {
        self.load()?;
        let index = self.index();
        Ok(ids
            .iter()
            .filter_map(|id| index.get(id.as_ref()).cloned())
            .collect())
    }

    /// Number of edges in the index built by the last load.
    pub fn edge_index_len(&self) -> usize {
        self.index().len()
    }
}

impl std::fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphStore")
            .field("location", &self.backend.location())
            .field("ready", &self.ready.load(Ordering::Relaxed))
            .finish()
    }
}

fn decode_graph(contents: &str) -> Graph {
    let mut graph = Graph::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Record::decode(line) {
            Ok(Record::Node(node)) => graph.nodes.push(node),
            Ok(Record::Edge(edge)) => graph.edges.push(edge),
            Err(e) => {
                tracing::debug!(line = line_no + 1, error = %e, "skipping undecodable line");
            }
        }
    }

    graph
}

fn encode_graph(graph: &Graph) -> StoreResult<String> {
    let mut lines = Vec::with_capacity(graph.node_count() + graph.edge_count());
    for node in &graph.nodes {
        lines.push(Record::Node(node.clone()).encode()?);
    }
    for edge in &graph.edges {
        if !edge.weight.is_finite() {
            return Err(StoreError::NonFiniteWeight {
                edge: edge.key().to_string(),
                weight: edge.weight,
            });
        }
        lines.push(Record::Edge(edge.clone()).encode()?);
    }
    Ok(lines.join("\n"))
}
