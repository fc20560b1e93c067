//! Shared constants: WCAG thresholds, wire sentinels, and defaults.

// ── WCAG 2.1 contrast thresholds ────────────────────────────────────
/// AAA for normal text.
pub const WCAG_AAA_NORMAL: f64 = 7.0;
/// AA for normal text.
pub const WCAG_AA_NORMAL: f64 = 4.5;
/// AAA for large text (18pt, or 14pt bold).
pub const WCAG_AAA_LARGE: f64 = 4.5;
/// AA for large text.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Lowest possible contrast ratio (identical colors).
pub const MIN_CONTRAST_RATIO: f64 = 1.0;
/// Highest possible contrast ratio (black on white).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

// ── Luminance ───────────────────────────────────────────────────────
/// sRGB linearization knee as published in WCAG 2.1.
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;
pub const LUMINANCE_WEIGHT_R: f64 = 0.2126;
pub const LUMINANCE_WEIGHT_G: f64 = 0.7152;
pub const LUMINANCE_WEIGHT_B: f64 = 0.0722;
/// Flare term added to both luminances in the ratio.
pub const CONTRAST_FLARE: f64 = 0.05;

// ── Entitlements ────────────────────────────────────────────────────
/// Stored quota value meaning "no limit". Only ever seen on the wire.
pub const UNLIMITED_SENTINEL: i64 = -1;
pub const DEFAULT_PLAN_ID: &str = "free";
pub const DEFAULT_UPGRADE_URL: &str = "https://hueprint.app/pricing";

// ── Defaults ────────────────────────────────────────────────────────
pub const DEFAULT_CONTRAST_CACHE_CAPACITY: u64 = 4_096;
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "HUEPRINT_LOG";
