//! Configuration loader for YAML files

use crate::config::types::*;
use crate::errors::GlossaryError;
use std::path::Path;

/// Configuration loader with validation
pub struct ConfigLoader;
impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<GlossaryConfig, GlossaryError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GlossaryError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_str(&content)?;
        Self::resolve_paths(&mut config, path.parent());
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<GlossaryConfig, GlossaryError> {
        // An empty document deserializes to null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(GlossaryConfig::default());
        }

        let config: GlossaryConfig = serde_yaml::from_str(content).map_err(|e| {
            GlossaryError::ConfigError(format!("Failed to parse YAML config: {}", e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve relative input and output paths against the config file's directory
    fn resolve_paths(config: &mut GlossaryConfig, base_dir: Option<&Path>) {
        let base_dir = match base_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return,
        };

        if let Some(input) = &config.input {
            if input.is_relative() {
                config.input = Some(base_dir.join(input));
            }
        }
        if let Some(output_dir) = &config.output_dir {
            if output_dir.is_relative() {
                config.output_dir = Some(base_dir.join(output_dir));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_basic_config() {
        let yaml_content = r#"
input: "words.txt"
output_dir: "site"
linking:
  separators: " ,."
output:
  atomic_writes: false
logging:
  level: "debug"
"#;

        let config = ConfigLoader::from_str(yaml_content).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("words.txt")));
        assert_eq!(config.output_dir, Some(PathBuf::from("site")));
        assert_eq!(config.linking.separators, " ,.");
        assert_eq!(config.loader.field_separators, "\t");
        assert!(!config.output.atomic_writes);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConfigLoader::from_str("").unwrap();
        assert_eq!(config, GlossaryConfig::default());
        assert_eq!(config.linking.separators, " \t,");
        assert!(config.output.atomic_writes);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ConfigLoader::from_str("linking: [unclosed").unwrap_err();
        assert!(matches!(err, GlossaryError::ConfigError(ref msg) if msg.contains("Failed to parse YAML")));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = ConfigLoader::from_str("logging:\n  level: loud\n").unwrap_err();
        assert!(matches!(err, GlossaryError::ConfigError(ref msg) if msg.contains("loud")));
    }

    #[test]
    fn test_empty_link_separators_rejected() {
        let err = ConfigLoader::from_str("linking:\n  separators: \"\"\n").unwrap_err();
        assert!(matches!(err, GlossaryError::ConfigError(_)));
    }

    #[test]
    fn test_relative_paths_resolved_against_config_dir() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "input: words.txt\noutput_dir: /var/www/glossary").unwrap();

        let config = ConfigLoader::from_file(file.path()).unwrap();
        let base = file.path().parent().unwrap();
        assert_eq!(config.input, Some(base.join("words.txt")));
        assert_eq!(config.output_dir, Some(PathBuf::from("/var/www/glossary")));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ConfigLoader::from_file("/nonexistent/glossary.yaml").unwrap_err();
        assert!(matches!(err, GlossaryError::ConfigError(ref msg) if msg.contains("Failed to read config file")));
    }
}
