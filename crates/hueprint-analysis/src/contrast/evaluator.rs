//! ContrastEvaluator: configured, optionally memoized contrast checks.

use serde::Serialize;
use tracing::debug;

use hueprint_core::config::ContrastConfig;
use hueprint_core::{Color, ColorError, ColorPalette};

use super::cache::ContrastCache;
use super::classify::{classify, TextSize, WcagLevel};
use super::luminance::relative_luminance;
use super::ratio::ContrastRatio;
use crate::report::{self, AccessibilityReport};

/// Outcome of one foreground/background check. The ratio serializes rounded
/// to 2 decimals; `level` was decided on the unrounded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: ContrastRatio,
    pub level: WcagLevel,
    pub is_accessible: bool,
}

impl ContrastResult {
    pub fn from_ratio(ratio: ContrastRatio, text_size: TextSize) -> Self {
        let class = classify(ratio.value(), text_size);
        Self {
            ratio,
            level: class.level,
            is_accessible: class.is_accessible,
        }
    }

    /// Evaluate a pair with no cache.
    pub fn between(foreground: Color, background: Color, text_size: TextSize) -> Self {
        Self::from_ratio(super::ratio::contrast_ratio(foreground, background), text_size)
    }
}

/// Stateless apart from its optional memo cache; safe to share across threads.
pub struct ContrastEvaluator {
    cache: Option<ContrastCache>,
    text_size: TextSize,
}

impl ContrastEvaluator {
    pub fn new(config: &ContrastConfig) -> Self {
        let cache = config
            .cache_enabled
            .then(|| ContrastCache::new(config.cache_capacity));
        debug!(
            cached = cache.is_some(),
            large_text = config.large_text,
            "contrast evaluator created"
        );
        Self {
            cache,
            text_size: TextSize::from_large(config.large_text),
        }
    }

    /// Evaluator without memoization, normal-text thresholds.
    pub fn uncached() -> Self {
        Self {
            cache: None,
            text_size: TextSize::Normal,
        }
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    pub fn ratio(&self, a: Color, b: Color) -> ContrastRatio {
        let compute = || {
            ContrastRatio::from_luminances(relative_luminance(a), relative_luminance(b)).value()
        };
        let value = match &self.cache {
            Some(cache) => cache.get_or_compute(a, b, compute),
            None => compute(),
        };
        ContrastRatio::from_value(value)
    }

    /// Evaluate with the configured text size.
    pub fn evaluate(&self, foreground: Color, background: Color) -> ContrastResult {
        self.evaluate_sized(foreground, background, self.text_size)
    }

    pub fn evaluate_sized(
        &self,
        foreground: Color,
        background: Color,
        text_size: TextSize,
    ) -> ContrastResult {
        ContrastResult::from_ratio(self.ratio(foreground, background), text_size)
    }

    /// Parse both colors, then evaluate. Fails fast on a malformed color.
    pub fn evaluate_hex(
        &self,
        foreground: &str,
        background: &str,
    ) -> Result<ContrastResult, ColorError> {
        Ok(self.evaluate(Color::parse(foreground)?, Color::parse(background)?))
    }

    /// Palette report. Always uses normal-text thresholds.
    pub fn report(&self, palette: &ColorPalette) -> AccessibilityReport {
        report::build_report(palette, |fg, bg| self.evaluate_sized(fg, bg, TextSize::Normal))
    }

    pub fn cache(&self) -> Option<&ContrastCache> {
        self.cache.as_ref()
    }
}

impl Default for ContrastEvaluator {
    fn default() -> Self {
        Self::new(&ContrastConfig::default())
    }
}
