// ABOUTME: Tracing subscriber setup for the IronLog server and structured domain log events
// ABOUTME: Output format and verbosity come from LOG_FORMAT and RUST_LOG; noisy crates are capped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Structured logging
//!
//! `LOG_FORMAT=json` emits one JSON object per line for log shippers,
//! `compact` prints single lines, anything else prints the default
//! human-readable layout. `RUST_LOG` accepts the usual `EnvFilter` syntax.

use std::env;
use std::io;
use std::str::FromStr;

use anyhow::Result;
use ironlog_core::constants::service_names;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Dependencies whose debug output drowns request logs
const QUIET_TARGETS: [&str; 4] = ["hyper=warn", "sqlx=warn", "tower_http=info", "h2=warn"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-field human readable output
    #[default]
    Full,
    /// Single-line output without targets
    Compact,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Full,
        })
    }
}

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, `info` unless `RUST_LOG` says otherwise
    pub filter: String,
    /// Output format
    pub format: LogFormat,
    /// Record file and line on every event
    pub include_location: bool,
    /// Emit span close events with timings
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
            format: LogFormat::Full,
            include_location: false,
            include_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION` and `LOG_INCLUDE_SPANS`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            filter: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        QUIET_TARGETS
            .iter()
            .filter_map(|directive| directive.parse().ok())
            .fold(EnvFilter::new(&self.filter), EnvFilter::add_directive)
    }

    const fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let base = fmt::layer()
            .with_writer(io::stdout)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(self.span_events());

        match self.format {
            LogFormat::Json => registry.with(base.json()).try_init()?,
            LogFormat::Full => registry.with(base).try_init()?,
            LogFormat::Compact => registry.with(base.compact().with_target(false)).try_init()?,
        }

        info!(
            service = service_names::IRONLOG_SERVER,
            version = env!("CARGO_PKG_VERSION"),
            filter = %self.filter,
            format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured domain events with stable field names
pub struct AppLogger;

impl AppLogger {
    /// Registration, login and password reset outcomes
    pub fn log_auth_event(user_id: &str, event: &str, success: bool, details: Option<&str>) {
        info!(
            user.id = %user_id,
            auth.event = %event,
            auth.success = success,
            auth.details = details.unwrap_or(""),
            "Authentication event"
        );
    }

    /// A served progress query and how much data it covered
    pub fn log_progress_query(user_id: &str, scope: &str, exercises: usize, points: usize) {
        info!(
            user.id = %user_id,
            progress.scope = %scope,
            progress.exercises = exercises,
            progress.points = points,
            "Progress query served"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Full));
    }

    #[test]
    fn test_quiet_targets_parse() {
        for directive in QUIET_TARGETS {
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
        let config = LoggingConfig::default();
        assert_eq!(config.span_events(), FmtSpan::NONE);
    }
}
