//! # hueprint-core
//!
//! Foundation crate for the Hueprint palette tool.
//! Defines colors, palettes, errors, config, tracing setup, constants,
//! and the subscription entitlement resolver.
//! `hueprint-analysis` depends on this.

pub mod config;
pub mod constants;
pub mod entitlements;
pub mod errors;
pub mod observability;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::HueprintConfig;
pub use entitlements::{
    feature_limit, has_feature_access, usage_remaining, EntitlementResolver, Feature,
    FeatureAccess, FeatureValue, PlanCatalog, PlanTier, Quota, SubscriptionPlan, UsageCounters,
};
pub use errors::error_code::HueprintErrorCode;
pub use errors::ColorError;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::color::Color;
pub use types::palette::{ColorPalette, PaletteRole};
