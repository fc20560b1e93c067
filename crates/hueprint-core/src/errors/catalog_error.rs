//! Plan catalog loading and validation errors.

use super::error_code::{self, HueprintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read plan catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid plan catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported plan catalog format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: String },

    #[error("duplicate plan id '{id}'")]
    DuplicatePlan { id: String },

    #[error("default plan '{id}' is not in the catalog")]
    UnknownDefault { id: String },
}

impl HueprintErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::DuplicatePlan { .. } => error_code::CATALOG_DUPLICATE_PLAN,
            Self::UnknownDefault { .. } => error_code::CATALOG_UNKNOWN_DEFAULT,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
