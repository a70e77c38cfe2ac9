//! Crate-wide error type and `Result` alias.
//!
//! Tree derivation and traversal are deliberately infallible — malformed
//! graphs degrade to best-effort output instead of erroring — so this type
//! only covers the I/O boundary: graph files, config files, and order tokens
//! arriving from outside the process.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeFlowError>;

#[derive(Debug, Error)]
pub enum TreeFlowError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown traversal order {0:?} (expected pre-order, in-order or post-order)")]
    UnknownOrder(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
