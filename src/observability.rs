//! Structured logging and engine metrics.
//!
//! - [`init_logging`] — one-time `tracing` setup with `RUST_LOG` support
//! - [`Metrics`] — atomic counters for derivations and playback activity

use std::sync::atomic::{AtomicU64, Ordering};

use tracing_subscriber::EnvFilter;

/// Initialize structured logging with `RUST_LOG` environment variable
/// support. Defaults to `treeflow=info` when `RUST_LOG` is not set. Call
/// once at program startup.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("treeflow=info"));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Counters for what the engine has done so far. Shared between the animator
/// and whoever wants to report on it, hence atomics.
#[derive(Debug, Default)]
pub struct Metrics {
    pub derivations: AtomicU64,
    pub animations_started: AtomicU64,
    pub animations_completed: AtomicU64,
    pub highlights_published: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "derivations": self.derivations.load(Ordering::Relaxed),
            "animations_started": self.animations_started.load(Ordering::Relaxed),
            "animations_completed": self.animations_completed.load(Ordering::Relaxed),
            "highlights_published": self.highlights_published.load(Ordering::Relaxed),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_does_not_panic() {
        init_logging();
        // Second call should also not panic (try_init ignores re-init).
        init_logging();
    }

    #[test]
    fn metrics_start_at_zero() {
        let m = Metrics::new();
        let json = m.to_json();
        assert_eq!(json["derivations"], 0);
        assert_eq!(json["animations_started"], 0);
        assert_eq!(json["animations_completed"], 0);
        assert_eq!(json["highlights_published"], 0);
    }

    #[test]
    fn metrics_to_json_reflects_counts() {
        let m = Metrics::new();
        m.animations_started.fetch_add(2, Ordering::Relaxed);
        m.highlights_published.fetch_add(7, Ordering::Relaxed);

        let json = m.to_json();
        assert_eq!(json["animations_started"], 2);
        assert_eq!(json["highlights_published"], 7);
    }
}
