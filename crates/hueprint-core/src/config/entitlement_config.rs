//! Subscription entitlement configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PLAN_ID, DEFAULT_UPGRADE_URL};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntitlementConfig {
    /// Plan catalog file (.toml or .json). None = built-in catalog.
    pub catalog_path: Option<String>,
    /// Plan assigned to users without a subscription.
    pub default_plan: String,
    /// Shown in "feature locked" messages.
    pub upgrade_url: String,
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_plan: DEFAULT_PLAN_ID.to_string(),
            upgrade_url: DEFAULT_UPGRADE_URL.to_string(),
        }
    }
}
