//! Contrast ratio between two colors.

use std::fmt;

use serde::{Serialize, Serializer};

use hueprint_core::constants::CONTRAST_FLARE;
use hueprint_core::Color;

use super::luminance::relative_luminance;

/// Unrounded contrast ratio in [1, 21].
///
/// Compare thresholds against [`value`](Self::value); use
/// [`rounded`](Self::rounded) or `Display` (`"N.NN:1"`) for presentation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ContrastRatio(f64);

impl ContrastRatio {
    pub fn from_luminances(l1: f64, l2: f64) -> Self {
        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        Self((lighter + CONTRAST_FLARE) / (darker + CONTRAST_FLARE))
    }

    /// Wrap an already computed ratio (e.g. a memoized one).
    pub fn from_value(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded to 2 decimal places.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for ContrastRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1", self.rounded())
    }
}

impl Serialize for ContrastRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.rounded())
    }
}

/// WCAG 2.1 contrast ratio. Symmetric in its arguments.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> ContrastRatio {
    ContrastRatio::from_luminances(relative_luminance(a), relative_luminance(b))
}
