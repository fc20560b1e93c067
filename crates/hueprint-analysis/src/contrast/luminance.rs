//! Relative luminance of an sRGB color.

use hueprint_core::constants::{
    LUMINANCE_WEIGHT_B, LUMINANCE_WEIGHT_G, LUMINANCE_WEIGHT_R, SRGB_LINEAR_THRESHOLD,
};
use hueprint_core::Color;

/// Linearize one sRGB channel given as a [0, 1] fraction.
pub fn linearize(c: f64) -> f64 {
    if c <= SRGB_LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.1 relative luminance, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_unit_rgb();
    LUMINANCE_WEIGHT_R * linearize(r)
        + LUMINANCE_WEIGHT_G * linearize(g)
        + LUMINANCE_WEIGHT_B * linearize(b)
}
