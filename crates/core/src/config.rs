//! TOML-based configuration for rostername.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosternameError};
use crate::rules::{ReplacementRule, ReplacementRules};
use crate::username::{UsernameGenerator, MIN_LENGTH_FLOOR};

/// Top-level configuration, deserialized from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosternameConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Length range and replacement table used for generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Ordered replacement rules. When absent, the built-in table is used;
    /// an empty list disables replacement entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacements: Option<Vec<ReplacementRule>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            replacements: None,
        }
    }
}

fn default_min_length() -> usize {
    MIN_LENGTH_FLOOR
}

fn default_max_length() -> usize {
    12
}

impl GeneratorConfig {
    /// Resolve the configured rules, falling back to the default table.
    pub fn replacement_rules(&self) -> ReplacementRules {
        match &self.replacements {
            Some(rules) => ReplacementRules::from(rules.clone()),
            None => ReplacementRules::default(),
        }
    }

    pub fn build_generator(&self) -> UsernameGenerator {
        UsernameGenerator::new(Some(self.replacement_rules()))
    }
}

impl RosternameConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| RosternameError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration, returning an error for invalid combinations.
    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;

        if generator.min_length < MIN_LENGTH_FLOOR {
            return Err(RosternameError::Config(format!(
                "generator.min_length must be at least {MIN_LENGTH_FLOOR}"
            )));
        }

        if generator.max_length < generator.min_length {
            return Err(RosternameError::Config(
                "generator.max_length must not be less than generator.min_length".into(),
            ));
        }

        if let Some(rules) = &generator.replacements {
            if let Some(pos) = rules.iter().position(|r| r.from.is_empty()) {
                return Err(RosternameError::Config(format!(
                    "generator.replacements[{pos}].from must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// Generate a default configuration with the replacement table spelled out.
    pub fn generate_default() -> Self {
        Self {
            generator: GeneratorConfig {
                replacements: Some(ReplacementRules::default().to_vec()),
                ..GeneratorConfig::default()
            },
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| RosternameError::Serialization(format!("failed to serialize config: {e}")))
    }
}
