//! Generate config command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use stopa_annotate::WebConfig;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::input::FileReader;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        FileReader::write_text(&self.output, &generate_template(), self.force)?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Choose a stress annotator in [annotation]");
        println!("2. Validate your configuration:");
        println!("   stopa validate --config {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   stopa analyze -i poem.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template with every setting at its default value
pub fn generate_template() -> String {
    let web = WebConfig::default();
    format!(
        r#"# stopa configuration

[annotation]
# Where stress marks come from: "web", "dictionary" or "none"
provider = "web"

# TOML word list used when provider = "dictionary"
# dictionary = "words.toml"

[annotation.web]
# Page the poem is posted to, and the form field carrying it
endpoint = "{endpoint}"
form_field = "{form_field}"
# Id of the element holding the stressed text in the response
result_id = "{result_id}"
timeout_secs = {timeout}
user_agent = "{user_agent}"

[annotation.web.retry]
attempts = {attempts}
delay_ms = {delay}

[output]
# "text", "json" or "markdown"
format = "text"
# Meter names: "english" or "native"
labels = "english"
show_text = false
show_annotated = false
pretty_json = true
"#,
        endpoint = web.endpoint,
        form_field = web.form_field,
        result_id = web.result_id,
        timeout = web.timeout_secs,
        user_agent = web.user_agent,
        attempts = web.retry.attempts,
        delay = web.retry.delay_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_the_default_config() {
        let config = CliConfig::from_toml_str(&generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("stopa.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[annotation.web.retry]"));

        // a second run needs --force
        assert!(args.execute().is_err());
        let forced = GenerateConfigArgs {
            force: true,
            ..args
        };
        assert!(forced.execute().is_ok());
    }
}
