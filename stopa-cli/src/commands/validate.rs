//! Validate command implementation

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use std::path::PathBuf;
use stopa_annotate::{DictionaryAnnotator, ProviderKind};

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).multiple(true).args(["config", "dictionary"])))]
pub struct ValidateArgs {
    /// Configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dictionary file to validate
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.config {
            println!("Validating configuration: {}", path.display());
            let config = CliConfig::from_file(path)
                .and_then(|config| config.validate().map(|()| config))
                .inspect_err(|e| report_invalid("Configuration", e))?;

            println!("✓ Configuration is valid!");
            println!("  Annotator: {}", config.annotation.provider);
            if config.annotation.provider == ProviderKind::Web {
                println!("  Endpoint: {}", config.annotation.web.endpoint);
            }
            println!("  Output format: {}", config.output.format.name());
        }

        if let Some(path) = &self.dictionary {
            println!("Validating dictionary: {}", path.display());
            let dictionary = DictionaryAnnotator::from_file(path)
                .with_context(|| format!("Validation failed: {}", path.display()))
                .inspect_err(|e| report_invalid("Dictionary", e))?;

            println!("✓ Dictionary is valid!");
            println!("  Entries: {}", dictionary.len());
        }

        Ok(())
    }
}

fn report_invalid(what: &str, error: &anyhow::Error) {
    println!("✗ {what} is invalid!");
    println!("  Error: {error:#}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = temp_file("[annotation]\nprovider = \"none\"\n\n[output]\nformat = \"json\"\n");
        let args = ValidateArgs {
            config: Some(file.path().to_path_buf()),
            dictionary: None,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let file = temp_file("[annotation.web]\nendpoint = \"slovnyk.ua\"\n");
        let args = ValidateArgs {
            config: Some(file.path().to_path_buf()),
            dictionary: None,
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_dictionary() {
        let valid = temp_file("[words]\n\"вода\" = \"вода́\"\n");
        let args = ValidateArgs {
            config: None,
            dictionary: Some(valid.path().to_path_buf()),
        };
        assert!(args.execute().is_ok());

        let invalid = temp_file("[words]\n\"вода\" = \"во́да́x\"\n");
        let args = ValidateArgs {
            config: None,
            dictionary: Some(invalid.path().to_path_buf()),
        };
        assert!(args.execute().is_err());
    }
}
