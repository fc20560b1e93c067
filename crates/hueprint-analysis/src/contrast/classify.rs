//! WCAG AA/AAA classification of a contrast ratio.

use std::fmt;

use serde::{Deserialize, Serialize};

use hueprint_core::constants::{WCAG_AAA_LARGE, WCAG_AAA_NORMAL, WCAG_AA_LARGE, WCAG_AA_NORMAL};

/// Compliance level badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Badge text: `"AA"`, `"AAA"`, or `"FAIL"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Minimum ratio for this level, or `None` for `Fail`.
    pub fn min_ratio(&self, text_size: TextSize) -> Option<f64> {
        match (self, text_size) {
            (Self::Fail, _) => None,
            (Self::Aa, TextSize::Normal) => Some(WCAG_AA_NORMAL),
            (Self::Aaa, TextSize::Normal) => Some(WCAG_AAA_NORMAL),
            (Self::Aa, TextSize::Large) => Some(WCAG_AA_LARGE),
            (Self::Aaa, TextSize::Large) => Some(WCAG_AAA_LARGE),
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Large text is 18pt, or 14pt bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    pub fn from_large(is_large_text: bool) -> Self {
        if is_large_text {
            Self::Large
        } else {
            Self::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub level: WcagLevel,
    pub is_accessible: bool,
}

/// Classify an unrounded ratio. AA or better counts as accessible.
pub fn classify(ratio: f64, text_size: TextSize) -> Classification {
    let (aaa, aa) = match text_size {
        TextSize::Normal => (WCAG_AAA_NORMAL, WCAG_AA_NORMAL),
        TextSize::Large => (WCAG_AAA_LARGE, WCAG_AA_LARGE),
    };

    let level = if ratio >= aaa {
        WcagLevel::Aaa
    } else if ratio >= aa {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    };

    Classification {
        level,
        is_accessible: level != WcagLevel::Fail,
    }
}
