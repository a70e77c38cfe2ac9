//! Graph layer — live graph store, binary-tree derivation, and traversal.

pub mod derive;
pub mod store;
pub mod traversal;
