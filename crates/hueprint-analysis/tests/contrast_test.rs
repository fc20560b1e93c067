//! WCAG luminance, contrast ratio, and classification.

use hueprint_analysis::{
    classify, contrast_ratio, relative_luminance, ContrastEvaluator, ContrastRatio, TextSize,
    WcagLevel,
};
use hueprint_core::config::ContrastConfig;
use hueprint_core::{Color, ColorError};

fn hex(s: &str) -> Color {
    Color::parse(s).unwrap()
}

// ─── Luminance ─────────────────────────────────────────────────────────────

#[test]
fn luminance_extremes() {
    assert_eq!(relative_luminance(hex("#FFFFFF")), 1.0);
    assert_eq!(relative_luminance(hex("#000000")), 0.0);
}

#[test]
fn luminance_is_case_insensitive() {
    assert_eq!(relative_luminance(hex("#abcdef")), relative_luminance(hex("ABCDEF")));
}

// ─── Ratio ─────────────────────────────────────────────────────────────────

#[test]
fn black_on_white_is_21() {
    let ratio = contrast_ratio(hex("#000000"), hex("#FFFFFF"));
    assert_eq!(ratio.rounded(), 21.0);
    assert_eq!(ratio.value(), 21.0);
    assert_eq!(ratio.to_string(), "21.00:1");
}

#[test]
fn identical_colors_are_exactly_1() {
    for s in ["#000000", "#FFFFFF", "#767676", "#3366CC"] {
        assert_eq!(contrast_ratio(hex(s), hex(s)).value(), 1.0);
    }
}

#[test]
fn ratio_is_order_independent() {
    let a = hex("#FF0000");
    let b = hex("#FFFFFF");
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
}

#[test]
fn known_reference_ratios() {
    // Published reference values.
    assert_eq!(contrast_ratio(hex("#767676"), hex("#FFFFFF")).rounded(), 4.54);
    assert_eq!(contrast_ratio(hex("#FF0000"), hex("#FFFFFF")).rounded(), 4.0);
    assert_eq!(contrast_ratio(hex("#777777"), hex("#FFFFFF")).to_string(), "4.48:1");
}

#[test]
fn display_pads_two_decimals() {
    assert_eq!(ContrastRatio::from_value(4.5).to_string(), "4.50:1");
    assert_eq!(ContrastRatio::from_value(1.0).to_string(), "1.00:1");
    assert_eq!(ContrastRatio::from_value(4.4949).to_string(), "4.49:1");
}

// ─── Classification ────────────────────────────────────────────────────────

#[test]
fn normal_text_boundaries() {
    assert_eq!(classify(4.5, TextSize::Normal).level, WcagLevel::Aa);
    assert_eq!(classify(4.49, TextSize::Normal).level, WcagLevel::Fail);
    assert_eq!(classify(7.0, TextSize::Normal).level, WcagLevel::Aaa);
    assert_eq!(classify(6.99, TextSize::Normal).level, WcagLevel::Aa);
    assert_eq!(classify(1.0, TextSize::Normal).level, WcagLevel::Fail);
    assert_eq!(classify(21.0, TextSize::Normal).level, WcagLevel::Aaa);
}

#[test]
fn large_text_boundaries() {
    assert_eq!(classify(4.5, TextSize::Large).level, WcagLevel::Aaa);
    assert_eq!(classify(4.49, TextSize::Large).level, WcagLevel::Aa);
    assert_eq!(classify(3.0, TextSize::Large).level, WcagLevel::Aa);
    assert_eq!(classify(2.99, TextSize::Large).level, WcagLevel::Fail);
}

#[test]
fn accessible_means_aa_or_better() {
    assert!(classify(4.5, TextSize::Normal).is_accessible);
    assert!(classify(7.0, TextSize::Normal).is_accessible);
    assert!(!classify(4.49, TextSize::Normal).is_accessible);
}

#[test]
fn default_text_size_is_normal() {
    assert_eq!(TextSize::default(), TextSize::Normal);
}

#[test]
fn classification_uses_unrounded_ratio() {
    // Rounds to 4.50 for display but is below the AA threshold.
    let ratio = ContrastRatio::from_value(4.4951);
    assert_eq!(ratio.to_string(), "4.50:1");
    assert_eq!(classify(ratio.value(), TextSize::Normal).level, WcagLevel::Fail);
}

#[test]
fn level_badges() {
    assert_eq!(WcagLevel::Aa.as_str(), "AA");
    assert_eq!(WcagLevel::Aaa.as_str(), "AAA");
    assert_eq!(WcagLevel::Fail.as_str(), "FAIL");
    assert_eq!(serde_json::to_string(&WcagLevel::Fail).unwrap(), "\"FAIL\"");
    assert_eq!(WcagLevel::Aa.min_ratio(TextSize::Normal), Some(4.5));
    assert_eq!(WcagLevel::Fail.min_ratio(TextSize::Large), None);
}

// ─── Evaluator ─────────────────────────────────────────────────────────────

#[test]
fn evaluator_cached_and_uncached_agree() {
    let cached = ContrastEvaluator::default();
    let uncached = ContrastEvaluator::uncached();
    let pairs = [("#000000", "#FFFFFF"), ("#767676", "#FFFFFF"), ("#1E293B", "#F8FAFC")];
    for (fg, bg) in pairs {
        let a = cached.evaluate(hex(fg), hex(bg));
        let b = uncached.evaluate(hex(fg), hex(bg));
        assert_eq!(a, b);
        // Cache hit with swapped order.
        assert_eq!(cached.ratio(hex(bg), hex(fg)), b.ratio);
    }
    assert!(cached.cache().is_some());
    assert!(uncached.cache().is_none());
}

#[test]
fn evaluator_honors_large_text_config() {
    let config = ContrastConfig {
        large_text: true,
        ..ContrastConfig::default()
    };
    let evaluator = ContrastEvaluator::new(&config);
    assert_eq!(evaluator.text_size(), TextSize::Large);
    // 4.54:1 is AAA for large text, AA for normal.
    assert_eq!(evaluator.evaluate(hex("#767676"), hex("#FFFFFF")).level, WcagLevel::Aaa);
    assert_eq!(
        evaluator
            .evaluate_sized(hex("#767676"), hex("#FFFFFF"), TextSize::Normal)
            .level,
        WcagLevel::Aa
    );
}

#[test]
fn evaluate_hex_rejects_malformed_input() {
    let evaluator = ContrastEvaluator::uncached();
    let err = evaluator.evaluate_hex("#GGGGGG", "#FFFFFF").unwrap_err();
    assert!(matches!(err, ColorError::InvalidColorFormat { .. }));
    assert!(evaluator.evaluate_hex("#fff", "#000000").is_err());

    let ok = evaluator.evaluate_hex("000000", "#ffffff").unwrap();
    assert_eq!(ok.level, WcagLevel::Aaa);
    assert!(ok.is_accessible);
}

#[test]
fn result_serializes_rounded_ratio() {
    let result = ContrastEvaluator::uncached().evaluate(hex("#767676"), hex("#FFFFFF"));
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["ratio"], 4.54);
    assert_eq!(json["level"], "AA");
    assert_eq!(json["isAccessible"], true);
}
