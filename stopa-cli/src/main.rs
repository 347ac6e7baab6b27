//! stopa command-line entry point

use clap::Parser;
use stopa_cli::commands::Commands;

/// Detect the metrical foot of Ukrainian verse
#[derive(Debug, Parser)]
#[command(name = "stopa", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["stopa", "analyze", "-t", "ма́ма", "-a", "none"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }
}
