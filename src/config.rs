//! Engine configuration.
//!
//! One knob matters to playback: the fixed interval between highlight
//! steps. Defaults to 700 ms. Loadable from a YAML file with serde
//! defaults, overridable by CLI flags.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Interval between highlight steps when none is configured.
pub const DEFAULT_STEP_MS: u64 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Milliseconds between highlight steps during playback.
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
}

fn default_step_ms() -> u64 {
    DEFAULT_STEP_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_ms: DEFAULT_STEP_MS,
        }
    }
}

impl EngineConfig {
    /// The step interval as a [`Duration`].
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    /// Load from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_700ms() {
        assert_eq!(EngineConfig::default().step(), Duration::from_millis(700));
    }

    #[test]
    fn load_reads_step_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("treeflow.yml");
        std::fs::write(&path, "step_ms: 250\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.step_ms, 250);
    }

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("treeflow.yml");
        std::fs::write(&path, "{}\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.step_ms, DEFAULT_STEP_MS);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/treeflow.yml")).unwrap_err();
        assert!(matches!(err, crate::error::TreeFlowError::Io(_)));
    }

    #[test]
    fn load_garbage_is_a_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("treeflow.yml");
        std::fs::write(&path, "step_ms: [not a number\n").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::error::TreeFlowError::Yaml(_)));
    }
}
