use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countries-cli
#[derive(Debug, Parser)]
#[command(
    name = "countries",
    version,
    about = "Browse, search and filter the countries directory"
)]
pub struct CliArgs {
    /// Dataset to load: .json, .json.gz, .bin or .bin.gz (default: bundled countries.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Optional comma-separated list of country codes to restrict the dataset to (e.g. DEU,FRA)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Match search terms ignoring accents ("reunion" finds "Réunion")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Print the render payload as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the distinct regions
    Regions,

    /// List countries, optionally narrowed by search term and region
    List {
        /// Case-insensitive substring of the country name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact region name (e.g. Europe)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Show the detail view of a country
    Show {
        /// Country code (e.g. DEU)
        code: String,
    },

    /// Write the loaded dataset in binary form (.bin or .bin.gz)
    Build {
        /// Output path
        out: PathBuf,
    },

    /// Interactive session driven by line commands on stdin
    Explore,
}

/// Splits a `--filter` value into codes, dropping blanks.
pub fn parse_filter(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .collect()
}
