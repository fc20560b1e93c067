use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

/// Install the global tracing subscriber.
///
/// `HUEPRINT_LOG` overrides `config.log_level`. Returns false if a global
/// subscriber was already installed; calling this twice is harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(json = config.json, "tracing initialized");
    }
    installed
}
