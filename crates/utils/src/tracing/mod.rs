use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub mod config;

pub use config::{ConfigError, LogFormat, TracingConfig};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn, Level};

#[derive(Error, Debug)]
pub enum InitError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install the global subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize the tracing system
///
/// Installs a global subscriber that filters with `config.filter` and writes
/// to stderr in the configured format. Fails if the filter does not parse or
/// a global subscriber is already installed.
pub fn init(config: &TracingConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_new(&config.filter)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_level(true);
    let fmt_layer = match config.format {
        LogFormat::Compact => fmt_layer.compact().boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(filter = %config.filter, format = %config.format, "tracing initialized");
    Ok(())
}

/// Initialize from the environment for test binaries.
///
/// Every test may call this. A subscriber installed by an earlier call is
/// kept; a bad `OPTIO_LOG` or `OPTIO_LOG_FORMAT` is reported on stderr.
pub fn init_for_tests() {
    let config = TracingConfig::from_env().unwrap_or_else(|err| {
        eprintln!("optio: {err}; using the default tracing config");
        TracingConfig::default()
    });
    if let Err(err) = try_init_for_tests(&config) {
        eprintln!("optio: {err}; tracing is disabled for this test binary");
    }
}

/// Like [`init`], but an already installed global subscriber is not an error.
pub fn try_init_for_tests(config: &TracingConfig) -> Result<(), InitError> {
    match init(config) {
        Err(InitError::Install(_)) => Ok(()),
        result => result,
    }
}
