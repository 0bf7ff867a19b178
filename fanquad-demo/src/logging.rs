use color_eyre::Report;
use tracing::Level;
use tracing_subscriber::{
    Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level for console output
    pub level: Level,
    /// Whether to emit JSON lines instead of human-readable output
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::INFO, json_format: false }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`, which returns the value
    /// of an environment variable if it is set.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Override log level from environment
        if let Some(level) = lookup("FANQUAD_LOG_LEVEL").and_then(|l| l.parse::<Level>().ok()) {
            config.level = level;
        }

        // Enable JSON format for structured logging
        if lookup("FANQUAD_JSON_LOGS").is_some() {
            config.json_format = true;
        }

        config
    }

    /// Applies command line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(mut self, level: Option<Level>, json_format: bool) -> Self {
        if let Some(level) = level {
            self.level = level;
        }
        self.json_format |= json_format;
        self
    }
}

/// Initialize the logging system with the given configuration.
///
/// Output goes to stdout. `RUST_LOG` directives are honored on top of the
/// configured default level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Report> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy()
        // winit and glutin are chatty at debug level
        .add_directive("winit=warn".parse()?)
        .add_directive("glutin=warn".parse()?);

    let console_layer = if config.json_format {
        fmt::layer().json().with_filter(filter).boxed()
    } else {
        fmt::layer()
            .with_target(false) // Hide module paths for cleaner console output
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry().with(console_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_defaults_without_env() {
        let config = LoggingConfig::from_vars(vars(&[]));
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_env_overrides() {
        let config = LoggingConfig::from_vars(vars(&[
            ("FANQUAD_LOG_LEVEL", "debug"),
            ("FANQUAD_JSON_LOGS", "1"),
        ]));
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
    }

    #[test]
    fn test_invalid_level_is_ignored() {
        let config = LoggingConfig::from_vars(vars(&[("FANQUAD_LOG_LEVEL", "loud")]));
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = LoggingConfig::from_vars(vars(&[("FANQUAD_LOG_LEVEL", "warn")]))
            .with_overrides(Some(Level::TRACE), false);
        assert_eq!(config.level, Level::TRACE);
        assert!(!config.json_format);
    }
}
