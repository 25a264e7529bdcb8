//! Configuration for the schema registry

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validation::NamingRules;

/// Configuration for a [`SchemaRegistry`](crate::SchemaRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    /// Maximum length of any element name (0 = unlimited)
    pub max_name_len: usize,

    /// Require names to be C-style identifiers
    pub strict_identifiers: bool,

    /// Refuse model references that make a model contain itself
    pub reject_reference_cycles: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_name_len: 0,
            strict_identifiers: false,
            reject_reference_cycles: true,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Parse a configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Export the configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse registry config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "Loaded registry config");
        Ok(config)
    }

    /// Naming rules applied to every element created under this configuration
    pub fn naming_rules(&self) -> NamingRules {
        NamingRules {
            max_len: self.max_name_len,
            strict_identifiers: self.strict_identifiers,
        }
    }
}

/// Builder for RegistryConfig
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Set the maximum name length (0 = unlimited)
    pub fn max_name_len(mut self, len: usize) -> Self {
        self.config.max_name_len = len;
        self
    }

    /// Enable or disable strict identifier names
    pub fn strict_identifiers(mut self, strict: bool) -> Self {
        self.config.strict_identifiers = strict;
        self
    }

    /// Enable or disable rejection of circular model references
    pub fn reject_reference_cycles(mut self, reject: bool) -> Self {
        self.config.reject_reference_cycles = reject;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RegistryConfig {
        self.config
    }
}
