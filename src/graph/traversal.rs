//! Pre-order, in-order, and post-order visit sequences.
//!
//! All three share the same recursive descent over the derived adjacency
//! map; only the position of the visit differs. Recursion depth is bounded
//! by tree height, which is fine for interactively-built trees. An id with
//! no adjacency entry ends recursion without appending anything, so every
//! sequence contains exactly the nodes reachable from the root. An id seen
//! before also ends recursion, so cyclic adjacency (which derivation flags
//! but still produces) terminates instead of recursing forever.

use std::collections::HashSet;

use crate::graph::derive::Adjacency;
use crate::types::TraversalOrder;

/// Compute the visit sequence for the requested order.
pub fn visit_sequence(order: TraversalOrder, root: &str, adjacency: &Adjacency) -> Vec<String> {
    match order {
        TraversalOrder::PreOrder => pre_order(root, adjacency),
        TraversalOrder::InOrder => in_order(root, adjacency),
        TraversalOrder::PostOrder => post_order(root, adjacency),
    }
}

/// Visit node, then left subtree, then right subtree.
pub fn pre_order(root: &str, adjacency: &Adjacency) -> Vec<String> {
    let mut path = Vec::new();
    walk_pre(Some(root), adjacency, &mut HashSet::new(), &mut path);
    path
}

/// Visit left subtree, then node, then right subtree.
pub fn in_order(root: &str, adjacency: &Adjacency) -> Vec<String> {
    let mut path = Vec::new();
    walk_in(Some(root), adjacency, &mut HashSet::new(), &mut path);
    path
}

/// Visit left subtree, then right subtree, then node.
pub fn post_order(root: &str, adjacency: &Adjacency) -> Vec<String> {
    let mut path = Vec::new();
    walk_post(Some(root), adjacency, &mut HashSet::new(), &mut path);
    path
}

fn walk_pre(
    id: Option<&str>,
    adjacency: &Adjacency,
    seen: &mut HashSet<String>,
    path: &mut Vec<String>,
) {
    let Some(id) = id else { return };
    let Some(entry) = adjacency.get(id) else { return };
    if !seen.insert(id.to_string()) {
        return;
    }
    path.push(id.to_string());
    walk_pre(entry.left.as_deref(), adjacency, seen, path);
    walk_pre(entry.right.as_deref(), adjacency, seen, path);
}

fn walk_in(
    id: Option<&str>,
    adjacency: &Adjacency,
    seen: &mut HashSet<String>,
    path: &mut Vec<String>,
) {
    let Some(id) = id else { return };
    let Some(entry) = adjacency.get(id) else { return };
    if !seen.insert(id.to_string()) {
        return;
    }
    walk_in(entry.left.as_deref(), adjacency, seen, path);
    path.push(id.to_string());
    walk_in(entry.right.as_deref(), adjacency, seen, path);
}

fn walk_post(
    id: Option<&str>,
    adjacency: &Adjacency,
    seen: &mut HashSet<String>,
    path: &mut Vec<String>,
) {
    let Some(id) = id else { return };
    let Some(entry) = adjacency.get(id) else { return };
    if !seen.insert(id.to_string()) {
        return;
    }
    walk_post(entry.left.as_deref(), adjacency, seen, path);
    walk_post(entry.right.as_deref(), adjacency, seen, path);
    path.push(id.to_string());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
