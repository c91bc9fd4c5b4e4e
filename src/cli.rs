use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::provision::ProvisionMode;

/// extract-settings - provisions the data/input/output layout
#[derive(Parser, Debug)]
#[command(name = "extract-settings")]
#[command(about = "Resolve and create the extraction tool's data directories")]
#[command(version)]
pub struct Cli {
    /// Root to provision under (overrides EXTRACT_BASE_DIR).
    ///
    /// Defaults to the directory two levels above this executable.
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Fail if an existing layout path is not a directory
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log every directory decision (adds a `debug` directive on top of RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create any missing directories (default)
    Provision,
    /// Print the resolved layout without creating anything
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Also write the JSON layout to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Verify the layout exists without creating anything
    Check,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> ProvisionMode {
        if self.strict {
            ProvisionMode::Strict
        } else {
            ProvisionMode::Shallow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults() {
        let cli = Cli::try_parse_from(["extract-settings"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.base_dir.is_none());
        assert_eq!(cli.mode(), ProvisionMode::Shallow);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["extract-settings", "check", "--base-dir", "/srv/x", "--strict"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(cli.base_dir, Some(PathBuf::from("/srv/x")));
        assert_eq!(cli.mode(), ProvisionMode::Strict);
    }

    #[test]
    fn test_show_options() {
        let cli =
            Cli::try_parse_from(["extract-settings", "show", "--json", "-o", "layout.json"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                json: true,
                output: Some(PathBuf::from("layout.json")),
            })
        );
    }
}
