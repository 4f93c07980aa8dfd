//! Configuration type definitions for the glossary generator

use crate::errors::GlossaryError;
use crate::linker::DEFAULT_LINK_SEPARATORS;
use crate::loader::DEFAULT_FIELD_SEPARATORS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub linking: LinkingConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cross-linking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkingConfig {
    #[serde(default = "default_link_separators")]
    pub separators: String,
}

/// Glossary input parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_field_separators")]
    pub field_separators: String,
}

/// Output directory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_link_separators() -> String {
    DEFAULT_LINK_SEPARATORS.to_string()
}

fn default_field_separators() -> String {
    DEFAULT_FIELD_SEPARATORS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            separators: default_link_separators(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            field_separators: default_field_separators(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            atomic_writes: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

impl GlossaryConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GlossaryError> {
        if self.linking.separators.is_empty() {
            return Err(GlossaryError::ConfigError(
                "linking.separators cannot be empty".to_string(),
            ));
        }

        if self
            .loader
            .field_separators
            .chars()
            .any(|c| c == '\n' || c == '\r')
        {
            return Err(GlossaryError::ConfigError(
                "loader.field_separators cannot contain line terminators".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(GlossaryError::ConfigError(format!(
                "Invalid logging.level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
