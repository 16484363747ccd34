//! Tracing/logging initialization.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "GODOWN_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!(
                "unknown log format {other:?} (expected json, pretty or compact)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `godown_allocation=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `GODOWN_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match format.as_deref().map(LogFormat::from_str) {
            Some(Ok(format)) => format,
            Some(Err(msg)) => {
                eprintln!("{LOG_FORMAT_ENV}: {msg}; using json");
                LogFormat::Json
            }
            None => LogFormat::Json,
        };
        Self { filter, format }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn missing_vars_use_defaults() {
        assert_eq!(ObservabilityConfig::from_vars(None, None), ObservabilityConfig::default());
        assert_eq!(
            ObservabilityConfig::from_vars(Some("  ".to_string()), None).filter,
            "info"
        );
    }

    #[test]
    fn vars_override_defaults() {
        let config = ObservabilityConfig::from_vars(
            Some("godown_allocation=debug".to_string()),
            Some("compact".to_string()),
        );
        assert_eq!(config.filter, "godown_allocation=debug");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = ObservabilityConfig::from_vars(None, Some("xml".to_string()));
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn init_twice_is_a_no_op() {
        init(&ObservabilityConfig::default());
        init(&ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        });
    }
}
