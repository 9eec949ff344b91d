//! Configuration schema types for `pxscale.toml`
//!
//! Defines the structure and validation rules for scaler configuration.

use crate::algorithms::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Scaling defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Algorithm used when none is given on the command line (Scale2x when
    /// unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Output path used when none is given on the command line
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Worker threads (defaults to one per core)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self { algorithm: None, output: default_output(), jobs: None }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("output.bmp")
}

/// Diagnostics settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level written to stderr (`off`, `error`, `warn`, `info`,
    /// `debug`, `trace`). `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Complete `pxscale.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PxscaleConfig {
    /// Scaling defaults
    #[serde(default)]
    pub scale: ScaleConfig,
    /// Diagnostics settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Validation error for a config field
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "scale.algorithm")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxscale.toml: '{}' {}", self.field, self.message)
    }
}

impl PxscaleConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(Err(e)) = self.scale.algorithm.as_deref().map(Algorithm::from_name) {
            errors.push(ConfigValidationError { field: "scale.algorithm".to_string(), message: e.to_string() });
        }

        if self.scale.output.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "scale.output".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.scale.jobs == Some(0) {
            errors.push(ConfigValidationError {
                field: "scale.jobs".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.log.level.parse::<LevelFilter>().is_err() {
            errors.push(ConfigValidationError {
                field: "log.level".to_string(),
                message: format!("'{}' is not a log level", self.log.level),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The configured default algorithm.
    ///
    /// Scale2x when unset, or when the name does not parse; [`validate`]
    /// reports the second case.
    ///
    /// [`validate`]: PxscaleConfig::validate
    pub fn algorithm(&self) -> Algorithm {
        self.scale
            .algorithm
            .as_deref()
            .and_then(|name| Algorithm::from_name(name).ok())
            .unwrap_or(Algorithm::Scale2x)
    }

    /// The configured log level, `warn` if it does not parse.
    pub fn log_level(&self) -> LevelFilter {
        self.log.level.parse().unwrap_or(LevelFilter::WARN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: PxscaleConfig = toml::from_str("").unwrap();
        assert_eq!(config, PxscaleConfig::default());
        assert_eq!(config.scale.algorithm, None);
        assert_eq!(config.algorithm(), Algorithm::Scale2x);
        assert_eq!(config.scale.output, PathBuf::from("output.bmp"));
        assert_eq!(config.scale.jobs, None);
        assert_eq!(config.log.level, "warn");
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[scale]
algorithm = "hq3xB"
output = "big/out.bmp"
jobs = 4

[log]
level = "debug"
"#;
        let config: PxscaleConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.algorithm(), Algorithm::Hq3xB);
        assert_eq!(config.scale.output, PathBuf::from("big/out.bmp"));
        assert_eq!(config.scale.jobs, Some(4));
        assert_eq!(config.log_level(), LevelFilter::DEBUG);
        assert!(config.is_valid());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let config: PxscaleConfig = toml::from_str("[scale]\nfactor = 3\n").unwrap();
        assert!(config.is_valid());
    }

    #[test]
    fn test_validation_unknown_algorithm() {
        let config: PxscaleConfig = toml::from_str("[scale]\nalgorithm = \"bicubic\"\n").unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scale.algorithm");
        assert!(errors[0].message.contains("bicubic"));
        assert_eq!(config.algorithm(), Algorithm::Scale2x);
    }

    #[test]
    fn test_validation_empty_output_and_zero_jobs() {
        let config: PxscaleConfig = toml::from_str("[scale]\noutput = \"\"\njobs = 0\n").unwrap();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["scale.output", "scale.jobs"]);
    }

    #[test]
    fn test_validation_bad_log_level() {
        let config: PxscaleConfig = toml::from_str("[log]\nlevel = \"loud\"\n").unwrap();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "log.level"));
        assert_eq!(config.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigValidationError { field: "scale.jobs".to_string(), message: "must be a positive integer".to_string() };
        assert_eq!(err.to_string(), "pxscale.toml: 'scale.jobs' must be a positive integer");
    }
}
