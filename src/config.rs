use std::path::PathBuf;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const USAGE: &str = "Usage: urbanmart-insights [sales].csv [log_level:optional] [backpressure:optional]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing path to the sales CSV file")]
    MissingPath
}

/// Settings taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub path: PathBuf,
    pub log_level: LevelFilter,
    /// Capacity of the loader channel, `None` keeps the loader default.
    pub backpressure: Option<usize>
}

impl AppConfig {
    /// Builds the configuration from the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>
    {
        let mut args = args.into_iter();
        let path = args.next().map(PathBuf::from).ok_or(ConfigError::MissingPath)?;
        let log_level = args.next()
            .map(|level| parse_log_level(&level))
            .unwrap_or(LevelFilter::ERROR);
        let backpressure = args.next().and_then(|value| parse_backpressure(&value));

        Ok(Self { path, log_level, backpressure })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

pub fn parse_backpressure(value: &str) -> Option<usize> {
    match value.parse::<usize>() {
        Ok(capacity) if capacity > 0 => Some(capacity),
        _ => {
            eprintln!("Invalid backpressure '{}', using the default", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_backpressure, parse_log_level, AppConfig, ConfigError};
    use anyhow::Result;
    use std::path::PathBuf;
    use tracing::level_filters::LevelFilter;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_config_requires_a_path() {
        assert_eq!(AppConfig::from_args(args(&[])), Err(ConfigError::MissingPath));
    }

    #[test]
    fn test_config_defaults_to_error_logging() -> Result<()> {
        let config = AppConfig::from_args(args(&["sales.csv"]))?;

        assert_eq!(config.path, PathBuf::from("sales.csv"));
        assert_eq!(config.log_level, LevelFilter::ERROR);
        assert_eq!(config.backpressure, None);

        Ok(())
    }

    #[test]
    fn test_config_reads_optional_log_level() -> Result<()> {
        let config = AppConfig::from_args(args(&["sales.csv", "DEBUG"]))?;

        assert_eq!(config.log_level, LevelFilter::DEBUG);

        Ok(())
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_error() {
        assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
        assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    }

    #[test]
    fn test_config_reads_optional_backpressure() -> Result<()> {
        let config = AppConfig::from_args(args(&["sales.csv", "info", "64"]))?;

        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.backpressure, Some(64));

        Ok(())
    }

    #[test]
    fn test_invalid_backpressure_keeps_default() {
        assert_eq!(parse_backpressure("0"), None);
        assert_eq!(parse_backpressure("lots"), None);
        assert_eq!(parse_backpressure("8"), Some(8));
    }
}
