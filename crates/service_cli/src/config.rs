//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, `UQTF_*` environment
//! variables and command line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "uqtf.toml";

const ENV_LOG_LEVEL: &str = "UQTF_LOG_LEVEL";
const ENV_SEED: &str = "UQTF_SEED";
const ENV_SAMPLE_SIZE: &str = "UQTF_SAMPLE_SIZE";
const ENV_OUTPUT_PRECISION: &str = "UQTF_OUTPUT_PRECISION";
const ENV_PARALLEL_THRESHOLD: &str = "UQTF_PARALLEL_THRESHOLD";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid output precision: {0}. Must be at most 17")]
    InvalidPrecision(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Seed for input sampling; fresh entropy when absent
    pub seed: Option<u64>,
    /// Number of realisations drawn when `-n` is omitted
    pub sample_size: usize,
    /// Decimal places in CSV output; shortest round-trip form when absent
    pub output_precision: Option<usize>,
    /// Row count from which evaluation switches to the parallel path
    pub parallel_threshold: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            seed: None,
            sample_size: 1000,
            output_precision: None,
            parallel_threshold: 100_000,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables supplied by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &seed)?);
        }
        if let Some(size) = lookup(ENV_SAMPLE_SIZE) {
            self.sample_size = parse_env(ENV_SAMPLE_SIZE, &size)?;
        }
        if let Some(precision) = lookup(ENV_OUTPUT_PRECISION) {
            self.output_precision = Some(parse_env(ENV_OUTPUT_PRECISION, &precision)?);
        }
        if let Some(threshold) = lookup(ENV_PARALLEL_THRESHOLD) {
            self.parallel_threshold = parse_env(ENV_PARALLEL_THRESHOLD, &threshold)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.output_precision {
            Some(precision) if precision > 17 => Err(ConfigError::InvalidPrecision(precision)),
            _ => Ok(()),
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.output_precision.is_some() {
            self.output_precision = cli.output_precision;
        }
        Ok(())
    }
}

/// Global CLI flags that feed the configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output precision override
    pub output_precision: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit path, else `uqtf.toml` if present)
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            CliConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => CliConfig::default(),
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.seed, None);
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.output_precision, None);
        assert_eq!(config.parallel_threshold, 100_000);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("Debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            seed = 42
            sample_size = 250
            output_precision = 6
            parallel_threshold = 5000
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.sample_size, 250);
        assert_eq!(config.output_precision, Some(6));
        assert_eq!(config.parallel_threshold, 5000);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sample_size, 1000);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<CliConfig>("samples = 3").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env_from(&[
                ("UQTF_SEED", "11"),
                ("UQTF_SAMPLE_SIZE", "20"),
                ("UQTF_LOG_LEVEL", "info"),
            ]))
            .unwrap();
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.sample_size, 20);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_env_rejects_bad_number() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(env_from(&[("UQTF_SAMPLE_SIZE", "-5")]))
            .unwrap_err();
        assert!(err.to_string().contains("UQTF_SAMPLE_SIZE"));
    }

    #[test]
    fn test_cli_takes_precedence_over_env() {
        let cli = CliArgs {
            seed: Some(3),
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        let config = build_config(&cli, env_from(&[("UQTF_SEED", "99")])).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_missing_explicit_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/uqtf.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&cli, |_| None),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_validate_precision() {
        let config = CliConfig {
            output_precision: Some(30),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
