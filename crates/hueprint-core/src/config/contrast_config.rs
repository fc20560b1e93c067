//! Contrast evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTRAST_CACHE_CAPACITY;

/// Configuration for the contrast/accessibility evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContrastConfig {
    /// Classify with large-text thresholds. Default: false. The palette
    /// report always uses normal-text thresholds.
    pub large_text: bool,
    /// Memoize contrast ratios per color pair. Default: true.
    pub cache_enabled: bool,
    /// Maximum memoized pairs. Default: 4096.
    pub cache_capacity: u64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            large_text: false,
            cache_enabled: true,
            cache_capacity: DEFAULT_CONTRAST_CACHE_CAPACITY,
        }
    }
}
