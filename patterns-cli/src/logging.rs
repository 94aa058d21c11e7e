//! Tracing subscriber setup

use crate::config::Config;
use crate::error::CliError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber that backs `TracingLogger`
///
/// `RUST_LOG` wins over the configured level when it parses.
pub fn init(config: &Config) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = if config.timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };

    installed.map_err(|e| CliError::Config(format!("Failed to install logger: {}", e)))
}
