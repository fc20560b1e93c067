//! Stable error codes surfaced to presentation layers.

/// Every Hueprint error maps to a stable string code the UI can switch on.
pub trait HueprintErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const INVALID_COLOR_FORMAT: &str = "INVALID_COLOR_FORMAT";
pub const MISSING_PALETTE_ROLE: &str = "MISSING_PALETTE_ROLE";
pub const UNKNOWN_PALETTE_ROLE: &str = "UNKNOWN_PALETTE_ROLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CATALOG_DUPLICATE_PLAN: &str = "CATALOG_DUPLICATE_PLAN";
pub const CATALOG_UNKNOWN_DEFAULT: &str = "CATALOG_UNKNOWN_DEFAULT";
pub const IO_ERROR: &str = "IO_ERROR";
