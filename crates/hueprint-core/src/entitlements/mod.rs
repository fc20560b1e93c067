//! Subscription Entitlements: 3-tier plans with quota-aware feature gating.
//!
//! ## Tiers
//! - **Free**: a few saved palettes and one PDF export
//! - **Pro**: + pro templates, color extraction, AI generation, no watermark
//! - **Enterprise**: + custom branding, team seats, priority support, no limits
//!
//! ## Components
//! - **features**: 10 gated features, access flags or quotas
//! - **value**: typed feature values; the `-1` "unlimited" sentinel exists only on the wire
//! - **plan**: SubscriptionPlan and its tier/interval
//! - **usage**: per-user usage counters (read-only to the resolver)
//! - **resolver**: fail-closed access, limit, and remaining-quota decisions
//! - **catalog**: PlanCatalog: built-in plans, TOML/JSON loading

pub mod catalog;
pub mod features;
pub mod plan;
pub mod resolver;
pub mod usage;
pub mod value;

pub use catalog::PlanCatalog;
pub use features::{Feature, FeatureKind};
pub use plan::{BillingInterval, PlanTier, SubscriptionPlan};
pub use resolver::{
    feature_limit, feature_limit_by_id, has_feature_access, has_feature_access_by_id,
    usage_remaining, usage_remaining_by_id, EntitlementResolver, EntitlementSummary,
    FeatureAccess,
};
pub use usage::UsageCounters;
pub use value::{FeatureValue, Quota};
