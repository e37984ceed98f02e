//! Logging infrastructure for diagram requests
//!
//! Structured logging uses the `tracing` crate. Events are written to stderr so
//! they never interleave with the diagram text written to the output sink.
//!
//! # Usage
//!
//! ```rust,no_run
//! use diagrammer::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! Only consulted when the caller passes no value, in this order:
//!
//! - `DIAGRAMMER_LOG_LEVEL`: log level or directive list (trace|debug|info|warn|error|off)
//! - `RUST_LOG`: same syntax, read when `DIAGRAMMER_LOG_LEVEL` is unset
//! - `DIAGRAMMER_LOG_FORMAT`: log format (compact|pretty|json)
//!
//! # Filtering Logs
//!
//! ```bash
//! # Watch pool hits and misses only
//! RUST_LOG="diagrammer::plugins::figure::pool=debug" diagrammer demo
//!
//! # Trace every construction step
//! RUST_LOG="info,diagrammer::plugins::graph::director=trace" diagrammer demo
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Variable consulted for the level when no explicit level is given
pub const LEVEL_ENV: &str = "DIAGRAMMER_LOG_LEVEL";
/// Variable consulted for the format when no explicit format is given
pub const FORMAT_ENV: &str = "DIAGRAMMER_LOG_FORMAT";

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_FORMAT: &str = "compact";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    /// Stderr layer for this format. Request spans are only reported on
    /// entry and exit in the verbose formats.
    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_level(true);

        match self {
            LogFormat::Compact => layer.with_target(false).compact().boxed(),
            LogFormat::Pretty => layer
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => layer
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .json()
                .boxed(),
        }
    }
}

/// Pick the first setting present: the explicit value, then each
/// environment value in order, then the default.
pub fn resolve_setting(explicit: Option<&str>, env_values: &[Option<String>], default: &str) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| env_values.iter().flatten().next().cloned())
        .unwrap_or_else(|| default.to_string())
}

/// Filter for an already resolved level directive. Unparseable directives
/// fall back to `info`.
pub fn level_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize the tracing subscriber with the given log level and format
///
/// * `level` - Level directive such as `debug` or `diagrammer=trace`. If
///   None, uses `DIAGRAMMER_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// * `format` - Log format. If None, uses `DIAGRAMMER_LOG_FORMAT`, then
///   `compact`.
///
/// An explicit level always wins over the environment.
///
/// Returns an error if the format is unknown or a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = resolve_setting(
        level,
        &[std::env::var(LEVEL_ENV).ok(), std::env::var("RUST_LOG").ok()],
        DEFAULT_LEVEL,
    );
    let log_format = resolve_setting(format, &[std::env::var(FORMAT_ENV).ok()], DEFAULT_FORMAT);

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    Registry::default()
        .with(format.layer())
        .with(level_filter(&log_level))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("Json").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_explicit_level_wins_over_environment() {
        let env = [Some("warn".to_string()), Some("error".to_string())];
        assert_eq!(resolve_setting(Some("debug"), &env, "info"), "debug");
        assert_eq!(resolve_setting(None, &env, "info"), "warn");
        assert_eq!(resolve_setting(None, &[None, Some("error".to_string())], "info"), "error");
        assert_eq!(resolve_setting(None, &[None, None], "info"), "info");
    }

    #[test]
    fn test_level_filter_uses_resolved_directive() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(level_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(level_filter("off").max_level_hint(), Some(LevelFilter::OFF));
        assert_eq!(level_filter("diagrammer=loud").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_format_variants() {
        let variants = LogFormat::variants();
        assert_eq!(variants.len(), 3);
        assert!(variants.contains(&"pretty"));
    }
}
