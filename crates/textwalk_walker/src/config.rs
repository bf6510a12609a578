//! Walk configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::WalkError;

/// Default nesting limit. Matches the recursion limit `serde_json` applies
/// when decoding, so any JSON document it accepts can be walked.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkConfig {
    /// Maximum nesting depth before the walk aborts.
    /// Every value entered counts as one level, the root included.
    /// Default: `Some(128)`. `None` disables the limit, in which case a
    /// cyclic value recurses until the stack overflows.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
}

fn default_max_depth() -> Option<usize> {
    Some(DEFAULT_MAX_DEPTH)
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl WalkConfig {
    /// Creates a new `WalkConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the nesting limit.
    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WalkError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| WalkError::config(format!("Invalid config: {}", e)))?;

        if config.max_depth == Some(0) {
            return Err(WalkError::config(
                "Invalid config: max_depth must be at least 1",
            ));
        }

        Ok(config)
    }
}
