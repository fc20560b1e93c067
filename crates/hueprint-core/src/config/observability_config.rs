//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. "info" or "hueprint_core=debug".
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
