use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::compare::CompareArg;
use crate::cli::parse::ParseArg;

const EXAMPLES: &str = "\
Examples:
  archive-dna parse plugin.zip output.json
  archive-dna compare output1.json output2.json
  archive-dna compare --mode identity output1.json output2.json";

#[derive(Debug, Parser)]
#[command(
    name = "archive-dna",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fingerprint ZIP archives and measure how similar two fingerprints are",
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true,
    after_help = EXAMPLES
)]
pub struct App {
    /// TOML configuration file [default: ./archive-dna.toml when present]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a ZIP archive and save its fingerprint document
    #[command(alias = "p", name = "parse")]
    Parse(ParseArg),
    /// Compare two fingerprint documents
    #[command(alias = "c", name = "compare")]
    Compare(CompareArg),
}
