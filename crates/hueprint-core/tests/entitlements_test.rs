//! Entitlement resolution: access flags, quotas, unlimited handling, fail-closed defaults.

use hueprint_core::config::EntitlementConfig;
use hueprint_core::entitlements::{
    feature_limit_by_id, has_feature_access_by_id, usage_remaining_by_id, BillingInterval,
    FeatureKind,
};
use hueprint_core::{
    feature_limit, has_feature_access, usage_remaining, EntitlementResolver, Feature,
    FeatureAccess, FeatureValue, PlanCatalog, PlanTier, Quota, SubscriptionPlan, UsageCounters,
};

fn plan_with(feature: Feature, value: FeatureValue) -> SubscriptionPlan {
    SubscriptionPlan::new("custom", "Custom", PlanTier::Pro, BillingInterval::Monthly)
        .with_feature(feature, value)
}

fn usage_of(feature: Feature, used: u32) -> UsageCounters {
    [(feature, used)].into_iter().collect()
}

// ============================================================
// Feature identifiers
// ============================================================

#[test]
fn all_10_features_defined() {
    assert_eq!(Feature::ALL.len(), 10);
    let quotas = Feature::ALL
        .iter()
        .filter(|f| f.kind() == FeatureKind::Quota)
        .count();
    assert_eq!(quotas, 4);
}

#[test]
fn feature_str_roundtrip() {
    for feature in &Feature::ALL {
        assert_eq!(Feature::parse(feature.as_str()), Some(*feature));
        assert!(!feature.description().is_empty());
    }
    assert_eq!(Feature::parse("nonexistent"), None);
}

#[test]
fn feature_min_tier_correct() {
    assert_eq!(Feature::SavedPalettes.min_tier(), PlanTier::Free);
    assert_eq!(Feature::ProTemplates.min_tier(), PlanTier::Pro);
    assert_eq!(Feature::CustomBranding.min_tier(), PlanTier::Enterprise);
    assert!(PlanTier::Free < PlanTier::Pro && PlanTier::Pro < PlanTier::Enterprise);
}

// ============================================================
// has_feature_access
// ============================================================

#[test]
fn access_true_only_for_literal_true() {
    let plan = plan_with(Feature::ProTemplates, FeatureValue::Access(true));
    assert!(has_feature_access(Some(&plan), Feature::ProTemplates));
}

#[test]
fn access_false_for_missing_key() {
    let plan = plan_with(Feature::SavedPalettes, FeatureValue::limited(5));
    assert!(!has_feature_access(Some(&plan), Feature::ProTemplates));
}

#[test]
fn access_false_for_false_and_zero() {
    let off = plan_with(Feature::ProTemplates, FeatureValue::Access(false));
    assert!(!has_feature_access(Some(&off), Feature::ProTemplates));

    let zero = plan_with(Feature::ProTemplates, FeatureValue::limited(0));
    assert!(!has_feature_access(Some(&zero), Feature::ProTemplates));
}

#[test]
fn access_false_for_any_quota_value() {
    let unlimited = plan_with(Feature::ProTemplates, FeatureValue::UNLIMITED);
    assert!(!has_feature_access(Some(&unlimited), Feature::ProTemplates));
    let some = plan_with(Feature::ProTemplates, FeatureValue::limited(10));
    assert!(!has_feature_access(Some(&some), Feature::ProTemplates));
}

#[test]
fn access_false_without_plan() {
    for feature in Feature::ALL {
        assert!(!has_feature_access(None, feature), "{:?} leaked without a plan", feature);
    }
}

// ============================================================
// feature_limit
// ============================================================

#[test]
fn limit_unlimited_is_infinite() {
    let plan = plan_with(Feature::SavedPalettes, FeatureValue::UNLIMITED);
    let limit = feature_limit(Some(&plan), Feature::SavedPalettes);
    assert_eq!(limit, Quota::Unlimited);
    assert_eq!(limit.as_f64(), f64::INFINITY);
}

#[test]
fn limit_finite_passes_through() {
    let plan = plan_with(Feature::SavedPalettes, FeatureValue::limited(12));
    assert_eq!(feature_limit(Some(&plan), Feature::SavedPalettes), Quota::Limited(12));
}

#[test]
fn limit_zero_for_absent_boolean_or_missing_plan() {
    let flag = plan_with(Feature::SavedPalettes, FeatureValue::Access(true));
    assert_eq!(feature_limit(Some(&flag), Feature::SavedPalettes), Quota::Limited(0));
    assert_eq!(feature_limit(Some(&flag), Feature::PdfExports), Quota::Limited(0));
    assert_eq!(feature_limit(None, Feature::PdfExports), Quota::Limited(0));
}

#[test]
fn limit_zero_for_invalid_stored_negative() {
    let plan: SubscriptionPlan = serde_json::from_str(
        r#"{"id":"x","name":"X","tier":"pro","interval":"monthly","features":{"saved_palettes":-5}}"#,
    )
    .unwrap();
    assert_eq!(feature_limit(Some(&plan), Feature::SavedPalettes), Quota::Limited(0));
}

// ============================================================
// usage_remaining
// ============================================================

#[test]
fn remaining_unlimited_ignores_usage() {
    let plan = plan_with(Feature::SavedPalettes, FeatureValue::UNLIMITED);
    for used in [0, 1, 1_000, u32::MAX] {
        let remaining = usage_remaining(Some(&plan), Feature::SavedPalettes, &usage_of(Feature::SavedPalettes, used));
        assert_eq!(remaining, Quota::Unlimited);
        assert_eq!(remaining.as_f64(), f64::INFINITY);
    }
}

#[test]
fn remaining_subtracts_usage() {
    let plan = plan_with(Feature::PdfExports, FeatureValue::limited(10));
    let remaining = usage_remaining(Some(&plan), Feature::PdfExports, &usage_of(Feature::PdfExports, 3));
    assert_eq!(remaining, Quota::Limited(7));
}

#[test]
fn remaining_missing_usage_counts_as_zero() {
    let plan = plan_with(Feature::PdfExports, FeatureValue::limited(10));
    let remaining = usage_remaining(Some(&plan), Feature::PdfExports, &UsageCounters::new());
    assert_eq!(remaining, Quota::Limited(10));
}

#[test]
fn remaining_never_negative_when_over_limit() {
    let plan = plan_with(Feature::PdfExports, FeatureValue::limited(2));
    let remaining = usage_remaining(Some(&plan), Feature::PdfExports, &usage_of(Feature::PdfExports, 9));
    assert_eq!(remaining, Quota::Limited(0));
}

#[test]
fn by_id_lookups_fail_closed_on_unknown_ids() {
    let plan = PlanCatalog::builtin().get("enterprise").cloned().unwrap();
    let usage = UsageCounters::new();
    assert!(has_feature_access_by_id(Some(&plan), "pro_templates"));
    assert!(!has_feature_access_by_id(Some(&plan), "time_travel"));
    assert_eq!(feature_limit_by_id(Some(&plan), "saved_palettes"), Quota::Unlimited);
    assert_eq!(feature_limit_by_id(Some(&plan), "time_travel"), Quota::Limited(0));
    assert_eq!(usage_remaining_by_id(Some(&plan), "time_travel", &usage), Quota::Limited(0));
}

// ============================================================
// Usage counters
// ============================================================

#[test]
fn usage_counters_increment_and_reset() {
    let mut usage = UsageCounters::new();
    assert_eq!(usage.get(Feature::SavedPalettes), 0);
    assert_eq!(usage.increment(Feature::SavedPalettes), 1);
    assert_eq!(usage.add(Feature::SavedPalettes, 4), 5);
    usage.set(Feature::PdfExports, u32::MAX);
    assert_eq!(usage.increment(Feature::PdfExports), u32::MAX);

    usage.reset_feature(Feature::SavedPalettes);
    assert_eq!(usage.get(Feature::SavedPalettes), 0);
    usage.reset();
    assert_eq!(usage.get(Feature::PdfExports), 0);
}

#[test]
fn usage_counters_json_skips_unknown_features() {
    let usage: UsageCounters =
        serde_json::from_str(r#"{"saved_palettes": 2, "legacy_feature": 9}"#).unwrap();
    assert_eq!(usage.get(Feature::SavedPalettes), 2);
    assert_eq!(usage.iter().count(), 1);
    assert_eq!(serde_json::to_string(&usage).unwrap(), r#"{"saved_palettes":2}"#);
}

// ============================================================
// EntitlementResolver
// ============================================================

#[test]
fn resolver_free_plan_locks_pro_features() {
    let catalog = PlanCatalog::builtin();
    let usage = UsageCounters::new();
    let resolver = EntitlementResolver::new(catalog.get("free"), &usage)
        .with_upgrade_url("https://example.test/upgrade");

    match resolver.check(Feature::ProTemplates) {
        FeatureAccess::Denied {
            required_tier,
            current_tier,
            upgrade_url,
            ..
        } => {
            assert_eq!(required_tier, PlanTier::Pro);
            assert_eq!(current_tier, Some(PlanTier::Free));
            assert_eq!(upgrade_url, "https://example.test/upgrade");
        }
        other => panic!("expected Denied, got {:?}", other),
    }

    // AI generations: free quota is 0, which is a lock, not an exhausted quota.
    assert!(matches!(resolver.check(Feature::AiGenerations), FeatureAccess::Denied { .. }));
}

#[test]
fn resolver_from_config_uses_configured_upgrade_url() {
    let config = EntitlementConfig {
        upgrade_url: "https://billing.hueprint.test/upgrade".to_string(),
        ..EntitlementConfig::default()
    };
    let catalog = PlanCatalog::from_config(&config);
    let mut usage = UsageCounters::new();
    usage.add(Feature::SavedPalettes, 3);
    let resolver = EntitlementResolver::from_config(catalog.default_plan(), &usage, &config);

    let locked = resolver.check(Feature::ProTemplates);
    assert!(matches!(
        locked,
        FeatureAccess::Denied { ref upgrade_url, .. } if upgrade_url == "https://billing.hueprint.test/upgrade"
    ));
    assert!(locked
        .denial_message()
        .unwrap()
        .ends_with("https://billing.hueprint.test/upgrade"));

    assert!(matches!(
        resolver.check(Feature::SavedPalettes),
        FeatureAccess::QuotaExhausted { ref upgrade_url, .. } if upgrade_url == "https://billing.hueprint.test/upgrade"
    ));
}

#[test]
fn resolver_quota_exhausted_after_limit() {
    let catalog = PlanCatalog::builtin();
    let mut usage = UsageCounters::new();
    usage.add(Feature::SavedPalettes, 3);
    let resolver = EntitlementResolver::new(catalog.get("free"), &usage);

    let access = resolver.check(Feature::SavedPalettes);
    assert_eq!(
        access,
        FeatureAccess::QuotaExhausted {
            feature: Feature::SavedPalettes,
            limit: 3,
            used: 3,
            upgrade_url: hueprint_core::constants::DEFAULT_UPGRADE_URL.to_string(),
        }
    );
    let message = access.denial_message().unwrap();
    assert!(message.contains("3 of 3"), "{}", message);
    assert!(!resolver.can_consume(Feature::SavedPalettes, 1));
    assert!(resolver.can_consume(Feature::PdfExports, 1));
}

#[test]
fn resolver_enterprise_allows_everything() {
    let catalog = PlanCatalog::builtin();
    let mut usage = UsageCounters::new();
    usage.set(Feature::SavedPalettes, 1_000_000);
    let resolver = EntitlementResolver::new(catalog.get("enterprise"), &usage);
    for feature in Feature::ALL {
        assert!(resolver.check(feature).is_allowed(), "{:?} should be allowed", feature);
    }
    assert!(resolver.can_consume(Feature::SavedPalettes, u32::MAX));
}

#[test]
fn resolver_without_plan_denies_everything() {
    let usage = UsageCounters::new();
    let resolver = EntitlementResolver::new(None, &usage);
    for feature in Feature::ALL {
        let access = resolver.check(feature);
        assert!(!access.is_allowed());
        assert!(matches!(access, FeatureAccess::Denied { current_tier: None, .. }));
        assert!(access.denial_message().is_some());
    }
}

#[test]
fn resolver_summary_covers_every_feature() {
    let catalog = PlanCatalog::builtin();
    let usage = usage_of(Feature::PdfExports, 5);
    let resolver = EntitlementResolver::new(catalog.get("pro"), &usage);
    let summary = resolver.summary();
    assert_eq!(summary.len(), Feature::ALL.len());

    let pdf = summary.iter().find(|s| s.feature == Feature::PdfExports).unwrap();
    assert_eq!(pdf.limit, Some(25));
    assert_eq!(pdf.used, 5);
    assert_eq!(pdf.remaining, Some(20));
    assert!(pdf.enabled);

    let templates = summary.iter().find(|s| s.feature == Feature::ProTemplates).unwrap();
    assert!(templates.enabled);
    assert_eq!(templates.limit, None);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json[0]["feature"], "saved_palettes");
    assert_eq!(json[0]["kind"], "quota");
}

#[test]
fn allowed_has_no_denial_message() {
    assert_eq!(FeatureAccess::Allowed.denial_message(), None);
}
