//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use stopa_annotate::ProviderKind;
use stopa_core::MeterType;

use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the metrical foot of poems
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration or dictionary file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List recognised meters
    Meters,

    /// List available output formats
    Formats,

    /// List stress annotation providers
    Annotators,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed by the list command
    pub fn render(self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Meters => {
                out.push_str("Available meters:\n");
                for meter in MeterType::ALL {
                    let foot = match meter.foot_length() {
                        Some(length) => format!("{length}-syllable foot"),
                        None => "no regular foot".to_string(),
                    };
                    out.push_str(&format!(
                        "  {:<12}{:<14}{foot}\n",
                        meter.label(),
                        meter.native_label()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for (format, description) in OutputFormat::ALL {
                    out.push_str(&format!("  {:<10}{description}\n", format.name()));
                }
            }
            ListCommands::Annotators => {
                out.push_str("Available annotators:\n");
                for kind in ProviderKind::ALL {
                    let description = match kind {
                        ProviderKind::Web => "stress-marking web page (network)",
                        ProviderKind::Dictionary => "offline TOML word list",
                        ProviderKind::None => "analyze the text as given",
                    };
                    out.push_str(&format!("  {:<12}{description}\n", kind.name()));
                }
            }
        }
        out
    }
}

/// Initialize logging from the verbosity count
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // a second initialization in the same process is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
