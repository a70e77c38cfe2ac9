//! TreeFlow — binary-tree derivation and traversal animation engine.
//!
//! Rebuilds a rooted binary tree (left/right child per node) from an
//! unordered, graphically-positioned node/edge graph, computes pre-order,
//! in-order and post-order visit sequences, and plays them back as a
//! timed highlight animation for a rendering collaborator to consume.

pub mod animator;
pub mod config;
pub mod error;
pub mod graph;
pub mod observability;
pub mod types;
