use serde::Serialize;

use hueprint_core::PaletteRole;

/// The foreground/background pairs every report evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportPair {
    TextOnBackground,
    TextSecondaryOnBackground,
    TextOnBrand,
    TextOnHighlight,
    TextOnAccent,
}

impl ReportPair {
    pub const ALL: [ReportPair; 5] = [
        Self::TextOnBackground,
        Self::TextSecondaryOnBackground,
        Self::TextOnBrand,
        Self::TextOnHighlight,
        Self::TextOnAccent,
    ];

    /// `(foreground, background)`.
    pub fn roles(&self) -> (PaletteRole, PaletteRole) {
        match self {
            Self::TextOnBackground => (PaletteRole::TextPrimary, PaletteRole::SectionBg1),
            Self::TextSecondaryOnBackground => (PaletteRole::TextSecondary, PaletteRole::SectionBg1),
            Self::TextOnBrand => (PaletteRole::TextPrimary, PaletteRole::Brand),
            Self::TextOnHighlight => (PaletteRole::TextPrimary, PaletteRole::Highlight),
            Self::TextOnAccent => (PaletteRole::TextPrimary, PaletteRole::Accent),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TextOnBackground => "Text on background",
            Self::TextSecondaryOnBackground => "Secondary text on background",
            Self::TextOnBrand => "Text on brand",
            Self::TextOnHighlight => "Text on highlight",
            Self::TextOnAccent => "Text on accent",
        }
    }
}
