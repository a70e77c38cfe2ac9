//! Root finding and binary-tree derivation.
//!
//! The editor stores an unordered node list plus directed parent→child
//! edges; nothing in that shape says which child is left and which is right.
//! Derivation rebuilds the binary structure on every traversal request:
//! siblings are ordered by ascending x-position, so the leftmost child on
//! screen becomes the `left` pointer. One rule covers the one-child and
//! many-child cases uniformly.
//!
//! Derivation never fails. Malformed graphs (multiple roots, cycles, parents
//! with more than two children) degrade to a best-effort tree, and the
//! problems found along the way are reported as [`GraphIssue`]s so callers
//! can distinguish a correct tree from a fallback one.

use std::collections::HashMap;

use crate::types::TreeGraph;

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Derived left/right child slots for one node. Ephemeral — rebuilt fresh on
/// every traversal request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub left: Option<String>,
    pub right: Option<String>,
    pub label: String,
}

/// Derived left/right child lookup, keyed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    entries: HashMap<String, AdjacencyEntry>,
}

impl Adjacency {
    pub fn get(&self, id: &str) -> Option<&AdjacencyEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AdjacencyEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ---------------------------------------------------------------------------
// GraphIssue / Derivation
// ---------------------------------------------------------------------------

/// Structural problems found while deriving. The tree is still produced —
/// these tell the caller it is a fallback, not a faithful binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphIssue {
    /// More than one node has no incoming edge.
    MultiRoot,
    /// The edge set contains a directed cycle.
    Cycle,
    /// Some parent has more than two children; the extras were dropped.
    Overbranching,
}

/// Best-effort derivation result: the adjacency map plus whatever structural
/// issues were noticed while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub adjacency: Adjacency,
    pub issues: Vec<GraphIssue>,
}

impl Derivation {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Root finder
// ---------------------------------------------------------------------------

/// Identify the root: the first node (in node-list order) that is never an
/// edge target. Falls back to the first node when every node is a target
/// (a cycle) — degenerate input, not an error. `None` only on an empty graph.
pub fn find_root(graph: &TreeGraph) -> Option<String> {
    let targeted: std::collections::HashSet<&str> =
        graph.edges.iter().map(|e| e.target.as_str()).collect();

    graph
        .nodes
        .iter()
        .find(|n| !targeted.contains(n.id.as_str()))
        .or_else(|| graph.nodes.first())
        .map(|n| n.id.clone())
}

// ---------------------------------------------------------------------------
// Tree deriver
// ---------------------------------------------------------------------------

/// Derive the binary adjacency structure, with validation.
pub fn derive(graph: &TreeGraph) -> Derivation {
    let mut entries: HashMap<String, AdjacencyEntry> = graph
        .nodes
        .iter()
        .map(|n| {
            (
                n.id.clone(),
                AdjacencyEntry {
                    left: None,
                    right: None,
                    label: n.label.clone(),
                },
            )
        })
        .collect();

    // Group edge targets by source.
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        children
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let position_of: HashMap<&str, f64> = graph
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.position.x))
        .collect();

    let mut overbranching = false;
    for (parent, kids) in &children {
        // Dangling edges (child id without a node) leave the slot unset.
        let mut kids: Vec<&str> = kids
            .iter()
            .copied()
            .filter(|id| position_of.contains_key(id))
            .collect();
        if kids.len() > 2 {
            overbranching = true;
        }
        // Leftmost on screen becomes the left child. Stable sort keeps edge
        // order as the tie-break for equal x.
        kids.sort_by(|a, b| {
            let ax = position_of.get(a).copied().unwrap_or(0.0);
            let bx = position_of.get(b).copied().unwrap_or(0.0);
            ax.total_cmp(&bx)
        });

        if let Some(entry) = entries.get_mut(*parent) {
            entry.left = kids.first().map(|id| (*id).to_string());
            entry.right = kids.get(1).map(|id| (*id).to_string());
        }
    }

    let adjacency = Adjacency { entries };
    let issues = collect_issues(graph, overbranching);
    Derivation { adjacency, issues }
}

/// Derive the adjacency map alone, discarding validation.
pub fn derive_adjacency(graph: &TreeGraph) -> Adjacency {
    derive(graph).adjacency
}

/// Structural validation: multi-root, cycle (Kahn's algorithm, iterative so
/// deep graphs cannot overflow the stack), overbranching.
fn collect_issues(graph: &TreeGraph, overbranching: bool) -> Vec<GraphIssue> {
    let mut issues = Vec::new();

    let node_ids: std::collections::HashSet<&str> =
        graph.nodes.iter().map(|n| n.id.as_str()).collect();

    // In-degree over edges whose endpoints both exist.
    let mut in_degree: HashMap<&str, usize> = node_ids.iter().map(|id| (*id, 0)).collect();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();
    for e in &graph.edges {
        if node_ids.contains(e.source.as_str()) && node_ids.contains(e.target.as_str()) {
            *in_degree.entry(e.target.as_str()).or_insert(0) += 1;
            outgoing
                .entry(e.source.as_str())
                .or_default()
                .push(e.target.as_str());
        }
    }

    let roots = graph
        .nodes
        .iter()
        .filter(|n| in_degree.get(n.id.as_str()).copied() == Some(0))
        .count();
    if roots > 1 {
        issues.push(GraphIssue::MultiRoot);
    }

    // Kahn: if peeling zero-in-degree nodes cannot consume the whole graph,
    // the remainder is cyclic.
    let mut queue: Vec<&str> = in_degree
        .iter()
        .filter(|(_, d)| **d == 0)
        .map(|(id, _)| *id)
        .collect();
    let mut processed = 0usize;
    while let Some(id) = queue.pop() {
        processed += 1;
        for next in outgoing.get(id).into_iter().flatten() {
            if let Some(d) = in_degree.get_mut(next) {
                *d -= 1;
                if *d == 0 {
                    queue.push(next);
                }
            }
        }
    }
    if processed < node_ids.len() {
        issues.push(GraphIssue::Cycle);
    }

    if overbranching {
        issues.push(GraphIssue::Overbranching);
    }

    issues
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
