//! Command line argument parsing for the Correcto CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Correcto - check spelling against a word list and suggest corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "correcto")]
#[command(about = "Check spelling against a word list and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorrectoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Word list, one or more whitespace-separated words per line
    #[arg(
        short,
        long,
        env = "CORRECTO_DICTIONARY",
        default_value = "dictionary.txt",
        global = true
    )]
    pub dictionary: PathBuf,

    /// Suggestion engine configuration file (JSON)
    #[arg(short, long, env = "CORRECTO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Maximum number of suggestions per word (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    pub max_suggestions: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorrectoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }

    /// Default log filter for the current verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check text for misspelled words (reads stdin when no text is given)
    Check(CheckArgs),

    /// Suggest corrections for a single word
    Suggest(SuggestArgs),

    /// Show dictionary statistics
    Stats,
}

/// Arguments for checking text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
