//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod check;
pub mod extract;
pub mod mora;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract tanka from text or pre-analyzed KNP files
    Extract(extract::ExtractArgs),

    /// Count the morae of hiragana readings
    Mora(mora::MoraArgs),

    /// Report whether sentences pass the character filter
    Check(check::CheckArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Mora(args) => args.execute(),
            Commands::Check(args) => args.execute(),
        }
    }
}
