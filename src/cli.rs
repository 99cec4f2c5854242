//! Command-line interface definitions

use crate::config::CliOverrides;
use crate::pagination::{PaginatorMode, PaginatorType};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Process exit codes
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Unspecified failure
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid command-line arguments
    pub const INVALID_ARGS: i32 = 2;
    /// Malformed initializer or seed value
    pub const INVALID_INITIALIZER: i32 = 3;
}

/// Page and sheet numbering for scanned image sequences
#[derive(Debug, Parser)]
#[command(name = "book-paginator", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print labels, one per line
    Labels(LabelsArgs),
    /// Print the initializer built from the seed value
    Initializer(LabelsArgs),
    /// List pagination types and modes with their legacy codes
    Modes,
}

#[derive(Debug, Clone, Args)]
pub struct LabelsArgs {
    /// Seed value, e.g. "1", "iv" or "a"
    #[arg(conflicts_with = "initializer", required_unless_present = "initializer")]
    pub value: Option<String>,

    /// Raw initializer, e.g. "1½¡`r`¿`v`"
    #[arg(short, long)]
    pub initializer: Option<String>,

    /// Numeral alphabet
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<PaginatorType>,

    /// Label shape
    #[arg(short, long, value_enum)]
    pub mode: Option<PaginatorMode>,

    /// Number of labels
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Bracket labels of non-physical pages
    #[arg(short, long)]
    pub fictitious: bool,

    /// Separator between the pages of a spread
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Print labels as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Config file (default: <config dir>/book-paginator/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl LabelsArgs {
    /// Values that override the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            kind: self.kind,
            mode: self.mode,
            separator: self.separator.clone(),
            // A flag can only switch fictitious on
            fictitious: self.fictitious.then_some(true),
            count: self.count,
        }
    }
}
