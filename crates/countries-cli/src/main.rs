//! countries: command-line browser for countries-core
//!
//! Prints dataset statistics and regions, lists countries narrowed by search
//! term and region, shows a country's detail view with its border links,
//! converts datasets to the binary format, and runs a line-driven browsing
//! session.
//!
//! Usage examples
//! --------------
//!
//! - Overall stats
//!   $ countries stats
//!
//! - List European countries whose name contains "ger"
//!   $ countries list --search ger --region Europe
//!
//! - Detail view (code is case-insensitive)
//!   $ countries show deu
//!
//! - Restrict the dataset, print JSON
//!   $ countries --filter=DEU,FRA --json list
//!
//! - Convert a dataset to compressed binary
//!   $ countries --input countries.json build countries.bin.gz
//!
//! - Interactive session (type `help` for commands)
//!   $ countries explore
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v`.
mod args;
mod render;
mod session;

use crate::args::{parse_filter, CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countries_core::{DefaultDataset, Explorer, MatchMode, ViewEvent};
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let dataset = load_dataset(&args)?;
    let mode = if args.fold_accents {
        MatchMode::Folded
    } else {
        MatchMode::Plain
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Stats => render::stats(&dataset.stats(), args.json, &mut out)?,

        Commands::Regions => {
            let explorer = Explorer::new(dataset);
            if args.json {
                serde_json::to_writer_pretty(&mut out, explorer.regions())?;
                writeln!(out)?;
            } else {
                for region in explorer.regions() {
                    writeln!(out, "{region}")?;
                }
            }
        }

        Commands::List { search, region } => {
            let mut explorer = Explorer::new(dataset).with_match_mode(mode);
            explorer.apply(ViewEvent::SearchInput(search));
            let rendered = explorer.apply(ViewEvent::SelectRegion(region));
            render::instruction(&rendered, args.json, &mut out)?;
        }

        Commands::Show { code } => {
            let mut explorer = Explorer::new(dataset);
            if !explorer.open_code(&code) {
                anyhow::bail!("No country found for: {code}");
            }
            render::instruction(&explorer.render(), args.json, &mut out)?;
        }

        Commands::Build { out: path } => {
            dataset
                .save_as(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            writeln!(out, "Wrote {} countries to {}", dataset.len(), path.display())?;
        }

        Commands::Explore => {
            let mut explorer = Explorer::new(dataset).with_match_mode(mode);
            if !args.json {
                writeln!(out, "Type 'help' for commands.")?;
            }
            session::run(&mut explorer, io::stdin().lock(), &mut out, args.json)?;
        }
    }

    Ok(())
}

/// Stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or `debug` with `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// The bundled dataset (shared, parsed once) or `--input`, then `--filter`.
fn load_dataset(args: &CliArgs) -> anyhow::Result<Arc<DefaultDataset>> {
    let dataset = match &args.input {
        Some(path) => Arc::new(
            DefaultDataset::load_from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
        ),
        None => DefaultDataset::load().context("loading bundled dataset")?,
    };

    Ok(match args.filter.as_deref() {
        Some(raw) => {
            let codes = parse_filter(raw);
            tracing::debug!(?codes, "restricting dataset");
            Arc::new(dataset.retain_codes(&codes))
        }
        None => dataset,
    })
}
