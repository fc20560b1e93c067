//! Entitlement resolution: plan + usage in, access decisions out.
//!
//! Every function here is total. A missing plan, a missing feature key, or a
//! value of the wrong kind resolves to "no access" / zero quota; absence is
//! never read as unlimited.

use serde::Serialize;
use tracing::debug;

use super::features::{Feature, FeatureKind};
use super::plan::{PlanTier, SubscriptionPlan};
use super::usage::UsageCounters;
use super::value::{FeatureValue, Quota};
use crate::config::EntitlementConfig;
use crate::constants::DEFAULT_UPGRADE_URL;

/// True only when the plan stores exactly `Access(true)` for the feature.
pub fn has_feature_access(plan: Option<&SubscriptionPlan>, feature: Feature) -> bool {
    matches!(
        plan.and_then(|p| p.feature(feature)),
        Some(FeatureValue::Access(true))
    )
}

/// The plan's quota for the feature. Access flags, missing keys, and a
/// missing plan all resolve to `Limited(0)`.
pub fn feature_limit(plan: Option<&SubscriptionPlan>, feature: Feature) -> Quota {
    match plan.and_then(|p| p.feature(feature)) {
        Some(FeatureValue::Quota(quota)) => quota,
        _ => Quota::NONE,
    }
}

/// Quota left after the recorded usage. Unlimited stays unlimited no matter
/// how much was used; finite quotas never go below zero.
pub fn usage_remaining(
    plan: Option<&SubscriptionPlan>,
    feature: Feature,
    usage: &UsageCounters,
) -> Quota {
    feature_limit(plan, feature).remaining(usage.get(feature))
}

/// [`has_feature_access`] for a raw feature id. Unknown ids resolve to false.
pub fn has_feature_access_by_id(plan: Option<&SubscriptionPlan>, feature_id: &str) -> bool {
    Feature::parse(feature_id).is_some_and(|f| has_feature_access(plan, f))
}

/// [`feature_limit`] for a raw feature id. Unknown ids resolve to zero.
pub fn feature_limit_by_id(plan: Option<&SubscriptionPlan>, feature_id: &str) -> Quota {
    Feature::parse(feature_id).map_or(Quota::NONE, |f| feature_limit(plan, f))
}

/// [`usage_remaining`] for a raw feature id. Unknown ids resolve to zero.
pub fn usage_remaining_by_id(
    plan: Option<&SubscriptionPlan>,
    feature_id: &str,
    usage: &UsageCounters,
) -> Quota {
    Feature::parse(feature_id).map_or(Quota::NONE, |f| usage_remaining(plan, f, usage))
}

/// Result of a feature gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureAccess {
    Allowed,
    Denied {
        feature: Feature,
        required_tier: PlanTier,
        current_tier: Option<PlanTier>,
        upgrade_url: String,
    },
    QuotaExhausted {
        feature: Feature,
        limit: u32,
        used: u32,
        upgrade_url: String,
    },
}

impl FeatureAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Text for the "feature locked" state, if any.
    pub fn denial_message(&self) -> Option<String> {
        match self {
            Self::Denied {
                feature,
                required_tier,
                upgrade_url,
                ..
            } => Some(format!(
                "{} requires the {} plan. Upgrade at {}",
                feature.description(),
                required_tier.label(),
                upgrade_url
            )),
            Self::QuotaExhausted {
                feature,
                limit,
                used,
                upgrade_url,
            } => Some(format!(
                "{}: {} of {} used. Upgrade at {} for more.",
                feature.description(),
                used,
                limit,
                upgrade_url
            )),
            Self::Allowed => None,
        }
    }
}

/// One row of the usage/pricing overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementSummary {
    pub feature: Feature,
    pub kind: FeatureKind,
    pub enabled: bool,
    /// `None` for access flags. `-1` encodes unlimited.
    pub limit: Option<i64>,
    pub used: u32,
    pub remaining: Option<i64>,
}

/// Borrowed view of one user's plan and usage.
///
/// Holds no state of its own; build one per request from whatever plan and
/// counters the caller currently has.
#[derive(Debug, Clone, Copy)]
pub struct EntitlementResolver<'a> {
    plan: Option<&'a SubscriptionPlan>,
    usage: &'a UsageCounters,
    upgrade_url: &'a str,
}

impl<'a> EntitlementResolver<'a> {
    pub fn new(plan: Option<&'a SubscriptionPlan>, usage: &'a UsageCounters) -> Self {
        Self {
            plan,
            usage,
            upgrade_url: DEFAULT_UPGRADE_URL,
        }
    }

    /// Resolver that sends locked-feature messages to the configured
    /// upgrade URL.
    pub fn from_config(
        plan: Option<&'a SubscriptionPlan>,
        usage: &'a UsageCounters,
        config: &'a EntitlementConfig,
    ) -> Self {
        Self::new(plan, usage).with_upgrade_url(&config.upgrade_url)
    }

    pub fn with_upgrade_url(mut self, upgrade_url: &'a str) -> Self {
        self.upgrade_url = upgrade_url;
        self
    }

    pub fn plan(&self) -> Option<&'a SubscriptionPlan> {
        self.plan
    }

    pub fn has_access(&self, feature: Feature) -> bool {
        has_feature_access(self.plan, feature)
    }

    pub fn limit(&self, feature: Feature) -> Quota {
        feature_limit(self.plan, feature)
    }

    pub fn remaining(&self, feature: Feature) -> Quota {
        usage_remaining(self.plan, feature, self.usage)
    }

    /// Whether `amount` more units of a quota feature may be consumed.
    pub fn can_consume(&self, feature: Feature, amount: u32) -> bool {
        self.remaining(feature).allows(amount)
    }

    /// Gate check. Access features need `Access(true)`; quota features need
    /// at least one unit remaining.
    pub fn check(&self, feature: Feature) -> FeatureAccess {
        let access = match feature.kind() {
            FeatureKind::Access if self.has_access(feature) => FeatureAccess::Allowed,
            FeatureKind::Quota if self.can_consume(feature, 1) => FeatureAccess::Allowed,
            FeatureKind::Quota => match self.limit(feature) {
                Quota::Limited(limit) if limit > 0 => FeatureAccess::QuotaExhausted {
                    feature,
                    limit,
                    used: self.usage.get(feature),
                    upgrade_url: self.upgrade_url.to_string(),
                },
                _ => self.denied(feature),
            },
            FeatureKind::Access => self.denied(feature),
        };

        if !access.is_allowed() {
            debug!(
                feature = feature.as_str(),
                plan = self.plan.map(|p| p.id.as_str()).unwrap_or("<none>"),
                "feature locked"
            );
        }
        access
    }

    /// Resolved state of every feature, in [`Feature::ALL`] order.
    pub fn summary(&self) -> Vec<EntitlementSummary> {
        Feature::ALL
            .iter()
            .map(|&feature| match feature.kind() {
                FeatureKind::Access => EntitlementSummary {
                    feature,
                    kind: FeatureKind::Access,
                    enabled: self.has_access(feature),
                    limit: None,
                    used: 0,
                    remaining: None,
                },
                FeatureKind::Quota => {
                    let limit = self.limit(feature);
                    let remaining = self.remaining(feature);
                    EntitlementSummary {
                        feature,
                        kind: FeatureKind::Quota,
                        enabled: remaining.allows(1),
                        limit: Some(limit.to_raw()),
                        used: self.usage.get(feature),
                        remaining: Some(remaining.to_raw()),
                    }
                }
            })
            .collect()
    }

    fn denied(&self, feature: Feature) -> FeatureAccess {
        FeatureAccess::Denied {
            feature,
            required_tier: feature.min_tier(),
            current_tier: self.plan.map(|p| p.tier),
            upgrade_url: self.upgrade_url.to_string(),
        }
    }
}
