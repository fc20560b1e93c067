pub mod contrast_config;
pub mod entitlement_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use contrast_config::ContrastConfig;
pub use entitlement_config::EntitlementConfig;
pub use observability_config::ObservabilityConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HueprintConfig {
    pub contrast: ContrastConfig,
    pub entitlements: EntitlementConfig,
    pub observability: ObservabilityConfig,
}

impl HueprintConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load config from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_toml(&content)?)
    }
}
