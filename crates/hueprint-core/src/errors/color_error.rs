//! Color and palette parsing errors.

use super::error_code::{self, HueprintErrorCode};

/// Errors raised while parsing colors or assembling a palette.
///
/// Callers propagate these; a bad color is never replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color format: {input:?} (expected 6 hex digits, optional leading '#')")]
    InvalidColorFormat { input: String },

    #[error("palette is missing role '{role}'")]
    MissingRole { role: String },

    #[error("unknown palette role '{role}'")]
    UnknownRole { role: String },
}

impl HueprintErrorCode for ColorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidColorFormat { .. } => error_code::INVALID_COLOR_FORMAT,
            Self::MissingRole { .. } => error_code::MISSING_PALETTE_ROLE,
            Self::UnknownRole { .. } => error_code::UNKNOWN_PALETTE_ROLE,
        }
    }
}
