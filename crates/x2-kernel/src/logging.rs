//! Structured logging support using the `tracing` crate.
//!
//! The kernel routines emit `tracing` events (`debug!` per matrix
//! computation, `warn!` for an ignored kernel selector). Libraries do not
//! install subscribers; applications that want to see those events without
//! setting up `tracing-subscriber` themselves can enable the
//! `structured-logging` feature and call [`TracingLoggerBuilder::build`].
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(feature = "structured-logging")]
//! # {
//! use x2_kernel::logging::{LogFormat, LogLevel, TracingLoggerBuilder};
//!
//! TracingLoggerBuilder::new()
//!     .with_format(LogFormat::Compact)
//!     .with_level(LogLevel::Debug)
//!     .build()
//!     .expect("Failed to initialize logger");
//! # }
//! ```

#[cfg(feature = "structured-logging")]
use crate::error::{KernelError, Result};

#[cfg(feature = "structured-logging")]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output format.
#[cfg(feature = "structured-logging")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    Pretty,
    /// Single-line format without colors.
    Compact,
    /// JSON lines.
    Json,
}

/// Log level filter.
#[cfg(feature = "structured-logging")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Show all logs.
    Trace,
    /// Show debug and higher.
    Debug,
    /// Show info and higher.
    Info,
    /// Show warnings and errors only.
    Warn,
    /// Show only errors.
    Error,
}

#[cfg(feature = "structured-logging")]
impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Configuration builder for the global `tracing` subscriber.
#[cfg(feature = "structured-logging")]
#[derive(Debug, Clone)]
pub struct TracingLoggerBuilder {
    format: LogFormat,
    level: LogLevel,
    env_filter: Option<String>,
    with_targets: bool,
    with_thread_ids: bool,
    with_span_events: bool,
}

#[cfg(feature = "structured-logging")]
impl Default for TracingLoggerBuilder {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: LogLevel::Info,
            env_filter: None,
            with_targets: true,
            with_thread_ids: false,
            with_span_events: false,
        }
    }
}

#[cfg(feature = "structured-logging")]
impl TracingLoggerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log level filter.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set a custom filter directive, e.g. `"x2_kernel=debug"`.
    /// Overrides the level setting.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Include target names in logs (module paths).
    pub fn with_targets(mut self, enabled: bool) -> Self {
        self.with_targets = enabled;
        self
    }

    /// Include thread IDs in logs. Useful with the parallel path.
    pub fn with_thread_ids(mut self, enabled: bool) -> Self {
        self.with_thread_ids = enabled;
        self
    }

    /// Enable span lifecycle events (enter/exit).
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.with_span_events = enabled;
        self
    }

    fn filter(&self) -> Result<EnvFilter> {
        match &self.env_filter {
            Some(directive) => {
                EnvFilter::try_new(directive).map_err(|e| KernelError::InvalidParameter {
                    parameter: "env_filter".to_string(),
                    value: directive.clone(),
                    reason: e.to_string(),
                })
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))),
        }
    }

    /// Install the subscriber globally.
    ///
    /// Only one global subscriber can exist; a second call returns
    /// [`KernelError::LoggingSetup`].
    pub fn build(self) -> Result<()> {
        let env_filter = self.filter()?;

        let span_events = if self.with_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let layer = fmt::layer()
            .with_target(self.with_targets)
            .with_thread_ids(self.with_thread_ids)
            .with_span_events(span_events);

        let registry = tracing_subscriber::registry().with(env_filter);
        let installed = match self.format {
            LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
            LogFormat::Compact => registry.with(layer.with_ansi(false).compact()).try_init(),
            LogFormat::Json => registry.with(layer.json()).try_init(),
        };

        installed.map_err(|e| KernelError::LoggingSetup(e.to_string()))
    }
}

#[cfg(all(test, feature = "structured-logging"))]
mod tests {
    use super::*;

    #[test]
    fn test_level_strings() {
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_builder_settings() {
        let builder = TracingLoggerBuilder::new()
            .with_format(LogFormat::Json)
            .with_level(LogLevel::Warn)
            .with_thread_ids(true);

        assert_eq!(builder.format, LogFormat::Json);
        assert_eq!(builder.level, LogLevel::Warn);
        assert!(builder.with_thread_ids);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let err = TracingLoggerBuilder::new()
            .with_env_filter("x2_kernel=loudest")
            .build()
            .unwrap_err();
        assert!(matches!(err, KernelError::InvalidParameter { .. }));
    }

    #[test]
    fn test_second_init_fails() {
        let first = TracingLoggerBuilder::new()
            .with_env_filter("x2_kernel=debug")
            .build();
        let second = TracingLoggerBuilder::new().build();

        // Another test may have installed the subscriber first.
        assert!(first.is_err() || second.is_err());
        if let Err(err) = second {
            assert!(matches!(err, KernelError::LoggingSetup(_)));
        }
    }
}
