//! Property tests for color parsing and entitlement resolution.

use proptest::prelude::*;

use hueprint_core::entitlements::BillingInterval;
use hueprint_core::{
    feature_limit, has_feature_access, usage_remaining, Color, Feature, FeatureValue, PlanTier,
    Quota, SubscriptionPlan, UsageCounters,
};

fn any_feature() -> impl Strategy<Value = Feature> {
    (0..Feature::ALL.len()).prop_map(|i| Feature::ALL[i])
}

fn any_value() -> impl Strategy<Value = FeatureValue> {
    prop_oneof![
        any::<bool>().prop_map(FeatureValue::Access),
        any::<u32>().prop_map(FeatureValue::limited),
        Just(FeatureValue::UNLIMITED),
    ]
}

proptest! {
    #[test]
    fn prop_hex_canonical_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::rgb(r, g, b);
        let lower = color.to_hex().to_lowercase();
        prop_assert_eq!(Color::parse(&lower).unwrap(), color);
        prop_assert_eq!(Color::parse(&lower[1..]).unwrap(), color);
    }

    #[test]
    fn prop_remaining_never_exceeds_limit(
        feature in any_feature(),
        value in any_value(),
        used in any::<u32>(),
    ) {
        let plan = SubscriptionPlan::new("p", "P", PlanTier::Pro, BillingInterval::Monthly)
            .with_feature(feature, value);
        let usage: UsageCounters = [(feature, used)].into_iter().collect();

        let limit = feature_limit(Some(&plan), feature);
        let remaining = usage_remaining(Some(&plan), feature, &usage);
        prop_assert!(remaining.as_f64() >= 0.0);
        prop_assert!(remaining.as_f64() <= limit.as_f64());
        prop_assert_eq!(remaining.is_unlimited(), limit.is_unlimited());
    }

    #[test]
    fn prop_access_requires_literal_true(feature in any_feature(), value in any_value()) {
        let plan = SubscriptionPlan::new("p", "P", PlanTier::Pro, BillingInterval::Monthly)
            .with_feature(feature, value);
        prop_assert_eq!(
            has_feature_access(Some(&plan), feature),
            value == FeatureValue::Access(true)
        );
    }

    #[test]
    fn prop_raw_quota_decoding(raw in any::<i64>()) {
        let quota = Quota::from_raw(raw);
        match raw {
            -1 => prop_assert_eq!(quota, Quota::Unlimited),
            r if r < 0 => prop_assert_eq!(quota, Quota::Limited(0)),
            r => prop_assert_eq!(quota, Quota::Limited(u32::try_from(r).unwrap_or(u32::MAX))),
        }
    }
}
