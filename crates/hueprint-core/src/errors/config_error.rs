//! Configuration loading errors.

use super::error_code::{self, HueprintErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl HueprintErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Parse(_) => error_code::CONFIG_ERROR,
        }
    }
}
