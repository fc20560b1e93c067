//! # hueprint-analysis
//!
//! Accessibility analysis for Hueprint palettes.
//! Contains the WCAG contrast evaluator, the palette accessibility
//! report, and deterministic scheme/mood palette generation.

pub mod contrast;
pub mod report;
pub mod scheme;

pub use contrast::{
    classify, contrast_ratio, relative_luminance, Classification, ContrastEvaluator,
    ContrastRatio, ContrastResult, TextSize, WcagLevel,
};
pub use report::{generate_accessibility_report, report_from_hex_map, AccessibilityReport};
