//! Mood presets: a base color and the scheme that suits it.

use std::fmt;

use serde::{Deserialize, Serialize};

use hueprint_core::{Color, ColorPalette};

use super::generator::{generate_palette, SchemeKind};
use super::hsl::Hsl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Calm,
    Energetic,
    Professional,
    Playful,
    Elegant,
    Natural,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Self::Calm,
        Self::Energetic,
        Self::Professional,
        Self::Playful,
        Self::Elegant,
        Self::Natural,
    ];

    pub fn base_color(&self) -> Color {
        let (h, s, l) = match self {
            Self::Calm => (200.0, 0.45, 0.55),
            Self::Energetic => (15.0, 0.85, 0.55),
            Self::Professional => (215.0, 0.55, 0.35),
            Self::Playful => (320.0, 0.75, 0.60),
            Self::Elegant => (270.0, 0.35, 0.30),
            Self::Natural => (110.0, 0.40, 0.40),
        };
        Hsl::new(h, s, l).to_color()
    }

    pub fn scheme(&self) -> SchemeKind {
        match self {
            Self::Calm | Self::Natural => SchemeKind::Analogous,
            Self::Energetic => SchemeKind::Complementary,
            Self::Professional => SchemeKind::Monochromatic,
            Self::Playful => SchemeKind::Triadic,
            Self::Elegant => SchemeKind::SplitComplementary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Professional => "professional",
            Self::Playful => "playful",
            Self::Elegant => "elegant",
            Self::Natural => "natural",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == s)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn generate_mood_palette(mood: Mood) -> ColorPalette {
    generate_palette(mood.base_color(), mood.scheme())
}
