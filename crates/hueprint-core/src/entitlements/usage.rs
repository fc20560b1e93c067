//! Per-user usage counters.
//!
//! Incremented by save/download actions and reset by the billing cycle.
//! The resolver only reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use super::features::Feature;
use crate::types::collections::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageCounters {
    counts: FxHashMap<Feature, u32>,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Units used so far; 0 when never recorded.
    pub fn get(&self, feature: Feature) -> u32 {
        self.counts.get(&feature).copied().unwrap_or(0)
    }

    /// Record one use. Returns the new count.
    pub fn increment(&mut self, feature: Feature) -> u32 {
        self.add(feature, 1)
    }

    /// Record `amount` uses, saturating at `u32::MAX`. Returns the new count.
    pub fn add(&mut self, feature: Feature, amount: u32) -> u32 {
        let count = self.counts.entry(feature).or_insert(0);
        *count = count.saturating_add(amount);
        *count
    }

    pub fn set(&mut self, feature: Feature, count: u32) {
        self.counts.insert(feature, count);
    }

    pub fn reset_feature(&mut self, feature: Feature) {
        self.counts.remove(&feature);
    }

    /// Billing-cycle reset.
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, u32)> + '_ {
        self.counts.iter().map(|(f, n)| (*f, *n))
    }
}

impl FromIterator<(Feature, u32)> for UsageCounters {
    fn from_iter<I: IntoIterator<Item = (Feature, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl Serialize for UsageCounters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ordered: BTreeMap<&'static str, u32> =
            self.counts.iter().map(|(f, n)| (f.as_str(), *n)).collect();
        ordered.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UsageCounters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut counts = FxHashMap::default();
        for (key, count) in raw {
            match Feature::parse(&key) {
                Some(feature) => {
                    counts.insert(feature, count);
                }
                None => warn!(feature = %key, "unknown feature in usage counters, ignoring"),
            }
        }
        Ok(Self { counts })
    }
}
