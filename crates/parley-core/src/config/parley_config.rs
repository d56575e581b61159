//! Top-level Parley configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FuzzyConfig, IntentConfig, ResponseConfig, StoreConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PARLEY_*`)
/// 2. Config file (`parley.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParleyConfig {
    pub store: StoreConfig,
    pub fuzzy: FuzzyConfig,
    pub intents: IntentConfig,
    pub responses: ResponseConfig,
}

impl ParleyConfig {
    /// Load from a TOML file, apply `PARLEY_*` overrides, and validate.
    ///
    /// A missing file is not an error: compiled defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `PARLEY_FUZZY_THRESHOLD`, `PARLEY_KEYWORD_MATCH`, etc.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are
    /// ignored and the previous value is kept.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PARLEY_FUZZY_THRESHOLD").and_then(|v| v.parse::<f64>().ok()) {
            self.fuzzy.threshold = v;
        }
        if let Some(v) = lookup("PARLEY_FUZZY_METRIC").and_then(|v| v.parse().ok()) {
            self.fuzzy.metric = v;
        }
        if let Some(v) =
            lookup("PARLEY_SIMILARITY_THRESHOLD").and_then(|v| v.parse::<f64>().ok())
        {
            self.intents.similarity_threshold = v;
        }
        if let Some(v) = lookup("PARLEY_KEYWORD_MATCH").and_then(|v| v.parse().ok()) {
            self.intents.keyword_match = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit_interval("fuzzy.threshold", self.fuzzy.threshold)?;
        check_unit_interval(
            "intents.similarity_threshold",
            self.intents.similarity_threshold,
        )?;
        if self.responses.fallback.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "responses.fallback".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}
