//! `tanka` command-line entry point

use clap::Parser;
use tanka_cli::commands::Commands;
use tanka_cli::CliResult;

/// Find 5-7-5-7-7 tanka hidden in Japanese prose
#[derive(Debug, Parser)]
#[command(name = "tanka", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_extract_command() {
        let argv = ["tanka", "extract", "-i", "corpus/*.txt", "-j", "4"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert!(matches!(cli.command, Commands::Extract(_)));
    }
}
