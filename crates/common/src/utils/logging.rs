use std::io;

use configs::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber from configuration.
/// - `RUST_LOG` wins over the configured filter
/// - Writes to stdout; a second call is a no-op
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.filter));
    match cfg.format {
        LogFormat::Compact => init_compact(env_filter),
        LogFormat::Json => init_json(env_filter),
    }
}

/// Compact human-readable output, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging_default() {
    init_logging(&LoggingConfig::default());
}

fn init_compact(env_filter: EnvFilter) {
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

fn init_json(env_filter: EnvFilter) {
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging_default();
        init_logging(&LoggingConfig { format: LogFormat::Json, filter: "debug".into() });
        tracing::info!("logging initialised twice");
    }
}
