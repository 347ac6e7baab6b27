//! Configuration module

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stopa_annotate::AnnotationConfig;
use stopa_core::LabelStyle;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "stopa.toml";

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Stress annotation configuration
    #[serde(default)]
    pub annotation: AnnotationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Meter label language
    pub labels: LabelStyle,

    /// Echo the original poem text
    pub show_text: bool,

    /// Echo the stress-annotated text
    pub show_annotated: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            labels: LabelStyle::English,
            show_text: false,
            show_annotated: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = FileReader::read_text(path)?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse configuration: {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else `stopa.toml` in the working directory if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Check the configuration for inconsistent settings
    pub fn validate(&self) -> Result<()> {
        self.annotation
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stopa_annotate::ProviderKind;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_sections() {
        let config = CliConfig::from_toml_str(
            r#"
            [annotation]
            provider = "dictionary"
            dictionary = "words.toml"

            [output]
            format = "markdown"
            labels = "native"
            "#,
        )
        .unwrap();

        assert_eq!(config.annotation.provider, ProviderKind::Dictionary);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.output.labels, LabelStyle::Native);
        assert!(config.output.pretty_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        assert!(CliConfig::from_toml_str("[output]\nformat = \"yaml\"").is_err());

        let config = CliConfig::from_toml_str("[annotation]\nprovider = \"dictionary\"").unwrap();
        assert!(config.validate().is_err());
    }
}
