#![forbid(unsafe_code)]

//! Logging configuration.
//!
//! Library crates emit events through `tracing` directly. Binaries call
//! [`LogConfig::install`] (feature `subscriber`) once at startup to attach a
//! `tracing-subscriber` registry with an env filter and a pretty or JSON
//! formatter.
//!
//! # Env Var Contract
//!
//! - `TEEMS_LOG` - filter directives (`info`, `teems_runtime=debug`, ...)
//! - `TEEMS_LOG_FORMAT` - `pretty` (default) or `json`
//!
//! # Invariants
//!
//! - `install()` never replaces an existing global subscriber.
//! - An unparsable filter falls back to [`DEFAULT_FILTER`].

use std::env;
use std::fmt;
use std::str::FromStr;

/// Filter used when `TEEMS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Errors from logging setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// `TEEMS_LOG_FORMAT` or `--log-format` named an unknown format.
    UnknownFormat(String),
    /// A global subscriber was already installed.
    SubscriberAlreadySet,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::UnknownFormat(s) => {
                write!(f, "unknown log format {s:?} (expected pretty or json)")
            }
            LoggingError::SubscriberAlreadySet => f.write_str("a global subscriber is already set"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Logging configuration resolved from env vars and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives in `EnvFilter` syntax.
    pub filter: String,
    /// Line format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Read `TEEMS_LOG` and `TEEMS_LOG_FORMAT`.
    ///
    /// An unknown format is ignored (the default is kept).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup("TEEMS_LOG")
            && !filter.trim().is_empty()
        {
            config.filter = filter;
        }
        if let Some(format) = lookup("TEEMS_LOG_FORMAT")
            && let Ok(format) = format.parse()
        {
            config.format = format;
        }
        config
    }

    /// Install a global subscriber for this configuration.
    #[cfg(feature = "subscriber")]
    pub fn install(&self) -> Result<(), LoggingError> {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let filter = EnvFilter::try_new(&self.filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let registry = tracing_subscriber::registry().with(filter);
        let installed = match self.format {
            LogFormat::Pretty => registry
                .with(tracing_subscriber::fmt::layer().with_target(true))
                .try_init(),
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
                .try_init(),
        };
        installed.map_err(|_| LoggingError::SubscriberAlreadySet)?;
        tracing::debug!(filter = %self.filter, format = %self.format, "logging installed");
        Ok(())
    }
}
