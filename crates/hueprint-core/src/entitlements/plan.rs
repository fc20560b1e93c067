//! Subscription plans as stored by the admin pricing editor.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use super::features::Feature;
use super::value::FeatureValue;
use crate::types::collections::FxHashMap;

/// Plan tier, ordered Free < Pro < Enterprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Free,
    Pro,
    Enterprise,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    Monthly,
    Yearly,
    Lifetime,
}

/// A purchasable plan. Read-only input to the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub tier: PlanTier,
    /// Price per interval in cents.
    #[serde(default)]
    pub price_cents: u32,
    pub interval: BillingInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Highlighted on the pricing page.
    #[serde(default)]
    pub popular: bool,
    #[serde(
        default,
        serialize_with = "serialize_features",
        deserialize_with = "deserialize_features"
    )]
    pub features: FxHashMap<Feature, FeatureValue>,
}

impl SubscriptionPlan {
    pub fn new(id: &str, name: &str, tier: PlanTier, interval: BillingInterval) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            price_cents: 0,
            interval,
            description: None,
            popular: false,
            features: FxHashMap::default(),
        }
    }

    pub fn with_price(mut self, price_cents: u32) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn with_feature(mut self, feature: Feature, value: FeatureValue) -> Self {
        self.features.insert(feature, value);
        self
    }

    pub fn feature(&self, feature: Feature) -> Option<FeatureValue> {
        self.features.get(&feature).copied()
    }
}

// Features serialize in a stable order keyed by their wire id.
fn serialize_features<S: Serializer>(
    features: &FxHashMap<Feature, FeatureValue>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let ordered: BTreeMap<&'static str, FeatureValue> =
        features.iter().map(|(f, v)| (f.as_str(), *v)).collect();
    ordered.serialize(serializer)
}

// Unknown feature ids are dropped: they can grant nothing.
fn deserialize_features<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<FxHashMap<Feature, FeatureValue>, D::Error> {
    let raw = BTreeMap::<String, FeatureValue>::deserialize(deserializer)?;
    let mut features = FxHashMap::default();
    for (key, value) in raw {
        match Feature::parse(&key) {
            Some(feature) => {
                features.insert(feature, value);
            }
            None => warn!(feature = %key, "unknown feature in stored plan, ignoring"),
        }
    }
    Ok(features)
}
