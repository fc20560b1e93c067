//! 10 gated features mapped to 3 plan tiers.
//!
//! Free: saved palettes, PDF exports (both metered)
//! Pro: AI generations, pro templates, image/website extraction, watermark removal
//! Enterprise: custom branding, team seats, priority support

use std::fmt;

use serde::{Deserialize, Serialize};

use super::plan::PlanTier;

/// All 10 gated features in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    // ── Free (2) ───────────────────────────────────────────────
    SavedPalettes,
    PdfExports,

    // ── Pro (5) ────────────────────────────────────────────────
    AiGenerations,
    ProTemplates,
    ImageExtraction,
    WebsiteExtraction,
    RemoveWatermark,

    // ── Enterprise (3) ─────────────────────────────────────────
    CustomBranding,
    TeamSeats,
    PrioritySupport,
}

/// Whether a feature is an on/off flag or a metered quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Access,
    Quota,
}

impl Feature {
    /// All 10 features.
    pub const ALL: [Feature; 10] = [
        Self::SavedPalettes,
        Self::PdfExports,
        Self::AiGenerations,
        Self::ProTemplates,
        Self::ImageExtraction,
        Self::WebsiteExtraction,
        Self::RemoveWatermark,
        Self::CustomBranding,
        Self::TeamSeats,
        Self::PrioritySupport,
    ];

    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::SavedPalettes | Self::PdfExports | Self::AiGenerations | Self::TeamSeats => {
                FeatureKind::Quota
            }
            _ => FeatureKind::Access,
        }
    }

    /// Lowest tier whose built-in plan unlocks this feature (for upgrade messages).
    pub fn min_tier(&self) -> PlanTier {
        match self {
            Self::SavedPalettes | Self::PdfExports => PlanTier::Free,

            Self::AiGenerations
            | Self::ProTemplates
            | Self::ImageExtraction
            | Self::WebsiteExtraction
            | Self::RemoveWatermark => PlanTier::Pro,

            Self::CustomBranding | Self::TeamSeats | Self::PrioritySupport => PlanTier::Enterprise,
        }
    }

    /// Feature id as stored in plans and usage maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SavedPalettes => "saved_palettes",
            Self::PdfExports => "pdf_exports",
            Self::AiGenerations => "ai_generations",
            Self::ProTemplates => "pro_templates",
            Self::ImageExtraction => "image_extraction",
            Self::WebsiteExtraction => "website_extraction",
            Self::RemoveWatermark => "remove_watermark",
            Self::CustomBranding => "custom_branding",
            Self::TeamSeats => "team_seats",
            Self::PrioritySupport => "priority_support",
        }
    }

    /// Parse feature from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "saved_palettes" => Some(Self::SavedPalettes),
            "pdf_exports" => Some(Self::PdfExports),
            "ai_generations" => Some(Self::AiGenerations),
            "pro_templates" => Some(Self::ProTemplates),
            "image_extraction" => Some(Self::ImageExtraction),
            "website_extraction" => Some(Self::WebsiteExtraction),
            "remove_watermark" => Some(Self::RemoveWatermark),
            "custom_branding" => Some(Self::CustomBranding),
            "team_seats" => Some(Self::TeamSeats),
            "priority_support" => Some(Self::PrioritySupport),
            _ => None,
        }
    }

    /// Human-readable description for upgrade messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SavedPalettes => "Saved palettes in your library",
            Self::PdfExports => "PDF palette report downloads",
            Self::AiGenerations => "AI palette auto-generation",
            Self::ProTemplates => "Pro landing-page templates",
            Self::ImageExtraction => "Extract palettes from images",
            Self::WebsiteExtraction => "Extract palettes from websites",
            Self::RemoveWatermark => "Watermark-free exports",
            Self::CustomBranding => "Custom branding on reports",
            Self::TeamSeats => "Team member seats",
            Self::PrioritySupport => "Priority support",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
