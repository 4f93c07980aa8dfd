//! Configuration module for the glossary generator
//!
//! Settings come from an optional YAML file or from the fluent builder. Every
//! section has defaults, so an empty file is a valid configuration.

pub mod types;
pub mod loader;
pub mod builder;

pub use types::*;
pub use loader::*;
pub use builder::ConfigBuilder;


use crate::errors::GlossaryError;
use std::path::Path;

/// Load a configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GlossaryConfig, GlossaryError> {
    ConfigLoader::from_file(path)
}
