//! Timed traversal playback.
//!
//! The animator snapshots the live graph once, derives the binary structure,
//! computes the visit sequence, then publishes one highlighted node id per
//! fixed step through a `watch` channel, ending with a `None` that clears
//! the spotlight. The rendering collaborator subscribes and applies the
//! style; a highlight naming an id that was deleted mid-animation is a
//! rendering no-op.
//!
//! Playback is cancellable through a generation counter: every `animate`
//! call claims a new generation, and an older in-flight animation stops
//! before its next write instead of racing the new one. The last animation
//! started always owns the highlight channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::EngineConfig;
use crate::graph::derive::{derive, find_root, GraphIssue};
use crate::graph::store::GraphStore;
use crate::graph::traversal::visit_sequence;
use crate::observability::Metrics;
use crate::types::TraversalOrder;

/// Cloneable playback handle. Clones share the highlight channel, the
/// generation counter, and the metrics.
#[derive(Debug, Clone)]
pub struct Animator {
    store: GraphStore,
    config: EngineConfig,
    highlight: Arc<watch::Sender<Option<String>>>,
    generation: Arc<AtomicU64>,
    metrics: Arc<Metrics>,
}

impl Animator {
    pub fn new(store: GraphStore, config: EngineConfig) -> Self {
        let (highlight, _) = watch::channel(None);
        Self {
            store,
            config,
            highlight: Arc::new(highlight),
            generation: Arc::new(AtomicU64::new(0)),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Subscribe to highlight changes: `Some(id)` per step, `None` when the
    /// spotlight clears.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.highlight.subscribe()
    }

    /// The currently spotlighted node, if any.
    pub fn highlighted(&self) -> Option<String> {
        self.highlight.borrow().clone()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Play one traversal over the current graph.
    ///
    /// Snapshots the store exactly once; structural edits made while the
    /// animation runs do not change the already-computed sequence. An empty
    /// graph completes immediately with zero publications and without
    /// disturbing any animation already in flight.
    pub async fn animate(&self, order: TraversalOrder) {
        let graph = self.store.snapshot();
        let derivation = derive(&graph);
        self.metrics.derivations.fetch_add(1, Ordering::Relaxed);

        let Some(root) = find_root(&graph) else {
            tracing::debug!("empty graph, nothing to animate");
            return;
        };
        // A cycle has no meaningful visit order; keep the spotlight dark
        // rather than play a fallback walk.
        if derivation.issues.contains(&GraphIssue::Cycle) {
            tracing::warn!("graph contains a cycle, refusing to animate");
            return;
        }
        if !derivation.is_clean() {
            tracing::warn!(issues = ?derivation.issues, "animating a best-effort tree");
        }

        let path = visit_sequence(order, &root, &derivation.adjacency);

        // Claim the channel; any older animation stops at its next check.
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.metrics.animations_started.fetch_add(1, Ordering::Relaxed);
        tracing::info!(%order, steps = path.len(), "starting traversal animation");

        for id in path {
            if self.generation.load(Ordering::SeqCst) != token {
                tracing::debug!("superseded, dropping remaining steps");
                return;
            }
            self.highlight.send_replace(Some(id));
            self.metrics.highlights_published.fetch_add(1, Ordering::Relaxed);
            tokio::time::sleep(self.config.step()).await;
        }

        if self.generation.load(Ordering::SeqCst) == token {
            self.highlight.send_replace(None);
            self.metrics.animations_completed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Run [`Animator::animate`] on a new task.
    pub fn spawn(&self, order: TraversalOrder) -> tokio::task::JoinHandle<()> {
        let animator = self.clone();
        tokio::spawn(async move { animator.animate(order).await })
    }

    /// Stop any in-flight animation and clear the spotlight.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.highlight.send_replace(None);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
