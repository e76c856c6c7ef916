//! Command line argument parsing for the spellrank CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_CLASSIFIER_KEY;

/// spellrank - Bayesian ranking of spelling corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "spellrank")]
#[command(about = "Rank spelling corrections with a naive Bayesian classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellRankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Directory holding stored classifiers
    #[arg(long, env = "SPELLRANK_STORE", default_value = "models")]
    pub store: PathBuf,

    /// Key of the classifier inside the store
    #[arg(long, default_value = DEFAULT_CLASSIFIER_KEY)]
    pub key: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellRankArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train the stored classifier from labelled samples
    Train(TrainArgs),

    /// Classify a set of features
    Classify(ClassifyArgs),

    /// Rank dictionary corrections for misspelled words
    Suggest(SuggestArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// JSON file with an array of {"class", "features"} samples
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Discard the stored classifier instead of adding to it
    #[arg(long)]
    pub reset: bool,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Feature tags to classify
    #[arg(value_name = "FEATURE")]
    pub features: Vec<String>,

    /// Class weights as CLASS=WEIGHT (repeatable)
    #[arg(short, long = "assume", value_name = "CLASS=WEIGHT")]
    pub assumptions: Vec<String>,
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Misspelled words
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Dictionary file, one word per line, most frequent first
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of corrections per word (defaults to the configured value)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Exponent of the Zipf frequency model
    #[arg(long, default_value = "1.0")]
    pub zipf_exponent: f64,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
