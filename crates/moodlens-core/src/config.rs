//! Configuration for moodlens.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::classifier::Classifier;
use crate::request::MIN_REFLECTION_CHARS;
use crate::types::Strategy;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Classifier configuration.
///
/// ```yaml
/// strategy: scored
/// min_reflection_chars: 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Matching strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Minimum trimmed length accepted by request validation
    #[serde(default = "default_min_reflection_chars")]
    pub min_reflection_chars: usize,
}

fn default_min_reflection_chars() -> usize {
    MIN_REFLECTION_CHARS
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            min_reflection_chars: MIN_REFLECTION_CHARS,
        }
    }
}

impl ClassifierConfig {
    /// Parse configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ClassifierConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file; `.json` is parsed as JSON, anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::from_json(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_reflection_chars == 0 {
            return Err(ConfigError::Invalid(
                "min_reflection_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the configured classifier.
    pub fn classifier(&self) -> Box<dyn Classifier + Send + Sync> {
        self.strategy.classifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.strategy, Strategy::FirstMatch);
        assert_eq!(config.min_reflection_chars, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = ClassifierConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ClassifierConfig::default());
    }

    #[test]
    fn test_yaml_overrides() {
        let config = ClassifierConfig::from_yaml(
            r#"
strategy: scored
min_reflection_chars: 12
"#,
        )
        .unwrap();
        assert_eq!(config.strategy, Strategy::Scored);
        assert_eq!(config.min_reflection_chars, 12);
        assert_eq!(config.classifier().strategy(), Strategy::Scored);
    }

    #[test]
    fn test_json_config() {
        let config = ClassifierConfig::from_json(r#"{"strategy": "first_match"}"#).unwrap();
        assert_eq!(config.strategy, Strategy::FirstMatch);
        assert_eq!(config.min_reflection_chars, 5);
    }

    #[test]
    fn test_zero_min_chars_rejected() {
        let err = ClassifierConfig::from_yaml("min_reflection_chars: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = ClassifierConfig::from_yaml("strategy: neural").unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ClassifierConfig::from_file("/nonexistent/moodlens.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
