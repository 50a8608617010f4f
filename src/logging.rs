//! Logging and tracing configuration
//!
//! Centralized tracing setup for the wayfinder front end. Console output
//! goes to stderr so routed output on stdout stays machine-readable; an
//! optional JSON file layer supports daily-rotated log files.

use std::io;
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether console output uses JSON formatting
    pub json_format: bool,
    /// Directory for daily-rotated JSON log files, if file logging is on
    pub log_directory: Option<String>,
    /// Whether console output uses ANSI colors
    pub enable_ansi: bool,
    /// Custom environment filter overriding the level
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting on the console layer
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable daily-rotated file logging into a directory
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set a custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("wayfinder={}", self.level))),
        };
        let registry = Registry::default().with(env_filter);

        match &self.log_directory {
            Some(directory) => {
                let appender = rolling::daily(directory, "wayfinder");
                let (file_writer, guard) = non_blocking(appender);
                let file_layer = fmt::layer().json().with_writer(file_writer);
                // The guard must outlive the program for buffered lines to flush.
                std::mem::forget(guard);
                let console = fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi && !self.json_format);
                if self.json_format {
                    registry.with(file_layer).with(console.json()).init();
                } else {
                    registry.with(file_layer).with(console).init();
                }
            }
            None => {
                let console = fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi && !self.json_format);
                if self.json_format {
                    registry.with(console.json()).init();
                } else {
                    registry.with(console).init();
                }
            }
        }
        Ok(())
    }

    /// Initialize verbose logging (INFO level)
    pub fn init_verbose() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::INFO).init()
    }

    /// Initialize debug logging (DEBUG level)
    pub fn init_debug() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::DEBUG).init()
    }

    /// Initialize minimal logging for normal interactive use (WARN level)
    pub fn init_quiet() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::WARN).without_ansi().init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json_format);
        assert!(config.log_directory.is_none());
        assert!(config.enable_ansi);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("logs")
            .without_ansi()
            .with_env_filter("wayfinder=trace");

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert_eq!(config.log_directory, Some("logs".to_string()));
        assert!(!config.enable_ansi);
        assert_eq!(config.env_filter, Some("wayfinder=trace".to_string()));
    }
}
