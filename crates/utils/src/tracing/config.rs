use optio_core::{DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT, OPTIO_LOG_FORMAT_VAR, OPTIO_LOG_VAR};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format '{value}' in {var} (expected 'compact' or 'pretty')")]
    UnknownFormat { var: &'static str, value: String },
}

/// How events are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::UnknownFormat {
                var: OPTIO_LOG_FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Subscriber settings.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `optio_optional=trace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
    pub ansi: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
            ansi: false,
        }
    }
}

impl TracingConfig {
    /// Read `OPTIO_LOG` and `OPTIO_LOG_FORMAT` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let filter = read(OPTIO_LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let format = read(OPTIO_LOG_FORMAT_VAR)
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string())
            .parse()?;

        Ok(Self {
            filter,
            format,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = TracingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "warn");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_reads_variables() {
        let config = TracingConfig::from_lookup(lookup(&[
            ("OPTIO_LOG", "optio_optional=trace"),
            ("OPTIO_LOG_FORMAT", " Pretty "),
        ]))
        .unwrap();
        assert_eq!(config.filter, "optio_optional=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let blank = lookup(&[("OPTIO_LOG", "  "), ("OPTIO_LOG_FORMAT", "")]);
        let config = TracingConfig::from_lookup(blank).unwrap();
        assert_eq!(config, TracingConfig::default());
    }

    #[test]
    fn test_unknown_format() {
        let err = TracingConfig::from_lookup(lookup(&[("OPTIO_LOG_FORMAT", "json")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownFormat {
                var: "OPTIO_LOG_FORMAT",
                value: "json".to_string()
            }
        );
        assert!(err.to_string().contains("'json'"));
    }

    #[test]
    fn test_builders() {
        let config = TracingConfig::default()
            .with_filter("debug")
            .with_format(LogFormat::Pretty)
            .with_ansi(true);
        assert_eq!(config.filter, "debug");
        assert_eq!(config.format.to_string(), "pretty");
        assert!(config.ansi);
    }
}
