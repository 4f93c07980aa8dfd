//! Configuration builder for the glossary generator
//!
//! Fluent API for constructing configurations programmatically.

use crate::config::types::*;
use crate::errors::GlossaryError;
use std::path::PathBuf;

/// Builder for creating glossary configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: GlossaryConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: GlossaryConfig) -> Self {
        Self { config }
    }

    /// Set the glossary input file
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = Some(path.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(path.into());
        self
    }

    /// Set the separator alphabet used for cross-linking
    pub fn link_separators(mut self, separators: impl Into<String>) -> Self {
        self.config.linking.separators = separators.into();
        self
    }

    /// Set the separator alphabet used to find the leading field of input lines
    pub fn field_separators(mut self, separators: impl Into<String>) -> Self {
        self.config.loader.field_separators = separators.into();
        self
    }

    pub fn atomic_writes(mut self, enabled: bool) -> Self {
        self.config.output.atomic_writes = enabled;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<GlossaryConfig, GlossaryError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation
    pub fn build_unchecked(self) -> GlossaryConfig {
        self.config
    }
}
