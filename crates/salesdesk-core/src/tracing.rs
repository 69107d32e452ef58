//! Tracing subscriber initialisation.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "SALESDESK_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call has an effect, and an already-installed subscriber (e.g. from
/// a test harness) is left alone.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let result = if config.json {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init()
        } else {
            tracing_subscriber::fmt().with_env_filter(filter).try_init()
        };

        if result.is_ok() {
            ::tracing::debug!(filter = %config.filter, json = config.json, "tracing initialised");
        }
    });
}
