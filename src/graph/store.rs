//! In-memory live graph store.
//!
//! Holds the authoritative node/edge lists the editor renders. The store is
//! shared mutable state: the owner mutates it (drag, delete, AI-issued
//! wholesale replacement) while an in-flight animation holds a snapshot
//! taken at start, so structural edits mid-animation never alter an
//! already-computed visit sequence.
//!
//! Replacements are accepted as-is — no schema validation happens here.
//! Structural problems surface later as [`GraphIssue`]s during derivation.
//!
//! [`GraphIssue`]: crate::graph::derive::GraphIssue

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::{Position, TreeEdge, TreeGraph, TreeNode};

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Aggregate counts for the stored graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

// ---------------------------------------------------------------------------
// GraphStore
// ---------------------------------------------------------------------------

/// Cloneable handle to the live graph. All clones observe the same state.
#[derive(Debug, Clone)]
pub struct GraphStore {
    inner: Arc<Mutex<TreeGraph>>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// A store seeded with the editor's initial single-root graph.
    pub fn new() -> Self {
        Self::with_graph(TreeGraph::initial())
    }

    /// A store with no nodes at all.
    pub fn empty() -> Self {
        Self::with_graph(TreeGraph::default())
    }

    pub fn with_graph(graph: TreeGraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TreeGraph> {
        // A panic while holding the lock poisons it; the graph itself is
        // always in a consistent state between operations, so recover.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Full clone of the current graph — the animator's one-time read.
    pub fn snapshot(&self) -> TreeGraph {
        self.lock().clone()
    }

    /// Wholesale replacement (the AI assistant's `newTreeState`).
    pub fn replace(&self, graph: TreeGraph) {
        tracing::debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "replacing graph");
        *self.lock() = graph;
    }

    /// Restore the initial single-root graph.
    pub fn reset(&self) {
        self.replace(TreeGraph::initial());
    }

    pub fn add_node(&self, node: TreeNode) {
        self.lock().nodes.push(node);
    }

    pub fn add_edge(&self, edge: TreeEdge) {
        self.lock().edges.push(edge);
    }

    /// Remove a node and every edge touching it.
    pub fn delete_node(&self, id: &str) {
        let mut graph = self.lock();
        graph.nodes.retain(|n| n.id != id);
        graph.edges.retain(|e| e.source != id && e.target != id);
    }

    /// Relabel a node. Unknown ids are ignored.
    pub fn edit_label(&self, id: &str, label: impl Into<String>) {
        let label = label.into();
        let mut graph = self.lock();
        if let Some(node) = graph.nodes.iter_mut().find(|n| n.id == id) {
            node.label = label;
        }
    }

    /// Position update from a drag. Unknown ids are ignored.
    pub fn move_node(&self, id: &str, position: Position) {
        let mut graph = self.lock();
        if let Some(node) = graph.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }

    pub fn stats(&self) -> GraphStats {
        let graph = self.lock();
        GraphStats {
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
