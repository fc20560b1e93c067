//! Readable text colors for a given background.

use hueprint_core::Color;

use super::hsl::Hsl;
use crate::contrast::{contrast_ratio, TextSize, WcagLevel};

const LIGHTNESS_STEP: f64 = 0.02;

/// Black or white, whichever contrasts more with `background` (black on ties).
///
/// One of the two always reaches AA for normal text.
pub fn best_text_color(background: Color) -> Color {
    let black = contrast_ratio(Color::BLACK, background).value();
    let white = contrast_ratio(Color::WHITE, background).value();
    if white > black {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Nudge `foreground` lightness away from `background` until the pair meets
/// `level` (normal text), keeping its hue and saturation.
///
/// Returns `foreground` unchanged if it already passes, and falls back to
/// [`best_text_color`] when no lightness shift gets there.
pub fn ensure_readable(foreground: Color, background: Color, level: WcagLevel) -> Color {
    let Some(target) = level.min_ratio(TextSize::Normal) else {
        return foreground;
    };
    if contrast_ratio(foreground, background).value() >= target {
        return foreground;
    }

    let darken = best_text_color(background) == Color::BLACK;
    let mut hsl = Hsl::from(foreground);
    loop {
        let next = if darken {
            hsl.l - LIGHTNESS_STEP
        } else {
            hsl.l + LIGHTNESS_STEP
        };
        if !(0.0..=1.0).contains(&next) {
            break;
        }
        hsl = hsl.with_lightness(next);

        let candidate = hsl.to_color();
        if contrast_ratio(candidate, background).value() >= target {
            return candidate;
        }
    }

    best_text_color(background)
}
