//! Basic usage example for countries-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset
//! - List regions and look up a country by code
//! - Build a filter predicate and apply it
//! - Resolve border codes through the lookup cache

use countries_rs::prelude::*;
use countries_rs::text::format_population;

fn main() -> Result<()> {
    println!("=== countries-rs Basic Usage Example ===\n");

    println!("Loading bundled dataset...");
    let dataset = DefaultDataset::load()?;
    println!("✓ {} countries loaded\n", dataset.len());

    println!("--- Example 1: Regions ---");
    for region in regions(&dataset) {
        println!("- {region}");
    }
    println!();

    println!("--- Example 2: Find country by code ---");
    if let Some(country) = dataset.find_by_code("jpn") {
        println!("Found: {} {}", country.flag(), country.name());
        println!("Capital: {}", country.capital());
        println!("Population: {}", format_population(country.population()));
    }
    println!();

    println!("--- Example 3: Search term + region ---");
    let predicate = build_predicate::<DefaultBackend>("ger", None);
    for c in filter_countries(&dataset, &predicate) {
        println!("'ger' matches {} ({})", c.name(), c.region());
    }
    let predicate = build_predicate::<DefaultBackend>("ger", Some("Europe"));
    let narrowed = filter_countries(&dataset, &predicate);
    println!("...in Europe only: {}\n", narrowed.len());

    println!("--- Example 4: Border countries ---");
    let mut cache = CodeLookupCache::new();
    if let Some(germany) = dataset.find_by_code("DEU") {
        let neighbours = cache.resolve_borders(&dataset, germany);
        println!(
            "{} lists {} borders, {} present in this dataset:",
            germany.name(),
            germany.borders().count(),
            neighbours.len()
        );
        for n in neighbours {
            println!("  - {}", n.name());
        }
    }

    let stats = dataset.stats();
    println!(
        "\n{} border links, {} point outside the dataset",
        stats.border_links, stats.unresolved_borders
    );
    Ok(())
}
