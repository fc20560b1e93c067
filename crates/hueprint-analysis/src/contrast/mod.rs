//! WCAG 2.1 contrast evaluation.
//!
//! Ratios are kept unrounded for classification; rounding to two decimals
//! happens only when a ratio is displayed or serialized.

pub mod cache;
pub mod classify;
pub mod evaluator;
pub mod luminance;
pub mod ratio;

pub use cache::ContrastCache;
pub use classify::{classify, Classification, TextSize, WcagLevel};
pub use evaluator::{ContrastEvaluator, ContrastResult};
pub use luminance::relative_luminance;
pub use ratio::{contrast_ratio, ContrastRatio};
