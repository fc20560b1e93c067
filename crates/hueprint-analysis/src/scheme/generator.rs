//! Color-wheel schemes that expand one base color into a full palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use hueprint_core::{Color, ColorPalette, PaletteRole};

use super::hsl::Hsl;
use super::readable::{best_text_color, ensure_readable};
use crate::contrast::WcagLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    SplitComplementary,
    Tetradic,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 6] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Tetradic,
    ];

    /// Hue offsets in degrees for (accent, highlight).
    pub fn hue_offsets(&self) -> (f64, f64) {
        match self {
            Self::Monochromatic => (0.0, 0.0),
            Self::Analogous => (30.0, -30.0),
            Self::Complementary => (180.0, 180.0),
            Self::Triadic => (120.0, 240.0),
            Self::SplitComplementary => (150.0, 210.0),
            Self::Tetradic => (90.0, 180.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split_complementary",
            Self::Tetradic => "tetradic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expand `base` into all 15 roles.
///
/// `brand` is `base` itself. Text roles are made AA-readable on
/// `section-bg-1`; button text is black or white, whichever reads better.
pub fn generate_palette(base: Color, kind: SchemeKind) -> ColorPalette {
    let brand = Hsl::from(base);
    let (accent_offset, highlight_offset) = kind.hue_offsets();
    let s = brand.s;

    let accent = match kind {
        SchemeKind::Monochromatic => {
            let l = if brand.l > 0.5 { brand.l - 0.2 } else { brand.l + 0.2 };
            brand.with_lightness(l)
        }
        _ => Hsl::new(brand.h + accent_offset, s.max(0.45), 0.55),
    }
    .to_color();
    let highlight = Hsl::new(brand.h + highlight_offset, (s * 0.8).min(0.9), 0.88).to_color();

    let section_bg_1 = Hsl::new(brand.h, s * 0.25, 0.98).to_color();
    let section_bg_2 = Hsl::new(brand.h + accent_offset, s * 0.3, 0.95).to_color();
    let section_bg_3 = Hsl::new(brand.h, s * 0.35, 0.92).to_color();
    let border = Hsl::new(brand.h, s * 0.2, 0.85).to_color();

    let text_primary = ensure_readable(
        Hsl::new(brand.h, s * 0.3, 0.15).to_color(),
        section_bg_1,
        WcagLevel::Aa,
    );
    let text_secondary = ensure_readable(
        Hsl::new(brand.h, s * 0.2, 0.38).to_color(),
        section_bg_1,
        WcagLevel::Aa,
    );

    ColorPalette::filled(base)
        .with(PaletteRole::Brand, base)
        .with(PaletteRole::Accent, accent)
        .with(PaletteRole::ButtonPrimary, base)
        .with(PaletteRole::ButtonText, best_text_color(base))
        .with(PaletteRole::ButtonSecondary, accent)
        .with(PaletteRole::ButtonSecondaryText, best_text_color(accent))
        .with(PaletteRole::TextPrimary, text_primary)
        .with(PaletteRole::TextSecondary, text_secondary)
        .with(PaletteRole::SectionBg1, section_bg_1)
        .with(PaletteRole::SectionBg2, section_bg_2)
        .with(PaletteRole::SectionBg3, section_bg_3)
        .with(PaletteRole::Border, border)
        .with(PaletteRole::Highlight, highlight)
        .with(PaletteRole::InputBg, Color::WHITE)
        .with(PaletteRole::InputText, text_primary)
}
