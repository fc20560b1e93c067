//! Error types for every Hueprint subsystem.
//!
//! Resolver absence (missing plan, missing feature, missing usage) is never
//! an error; it resolves fail-closed in `entitlements`.

pub mod catalog_error;
pub mod color_error;
pub mod config_error;
pub mod error_code;

pub use catalog_error::CatalogError;
pub use color_error::ColorError;
pub use config_error::ConfigError;
pub use error_code::HueprintErrorCode;
