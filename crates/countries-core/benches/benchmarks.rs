//! Filtering and lookup benchmarks over a synthetic dataset.
//!
//! Run with: cargo bench -p countries-core

use countries_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

fn synthetic(n: usize) -> Arc<Dataset<DefaultBackend>> {
    let countries = (0..n).map(|i| {
        let code = format!("{:03}", i % 1000);
        let left = format!("{:03}", (i + 1) % 1000);
        let right = format!("{:03}", (i + 7) % 1000);
        Country::new(&format!("Country {i} Land"), &code)
            .with_region(REGIONS[i % REGIONS.len()])
            .with_population(i as u64 * 1_000)
            .with_borders(&[&left, &right])
    });
    Arc::new(countries.collect())
}

fn bench_filter(c: &mut Criterion) {
    let ds = synthetic(1_000);

    c.bench_function("filter term+region", |b| {
        let predicate = build_predicate::<DefaultBackend>("land 9", Some("Asia"));
        b.iter(|| filter_countries(black_box(&ds), &predicate).len())
    });

    c.bench_function("filter folded term", |b| {
        let predicate = FilterRule::new("land 9", None).into_predicate(MatchMode::Folded);
        b.iter(|| filter_countries(black_box(&ds), &predicate).len())
    });

    c.bench_function("regions", |b| b.iter(|| regions(black_box(&ds)).len()));
}

fn bench_lookup(c: &mut Criterion) {
    let ds = synthetic(1_000);

    c.bench_function("lookup cached borders", |b| {
        let mut cache = CodeLookupCache::new();
        let home = Arc::clone(&ds.countries()[500]);
        b.iter(|| cache.resolve_borders(&ds, black_box(&home)).len())
    });

    c.bench_function("explorer search keystrokes", |b| {
        let mut ex = Explorer::new(Arc::clone(&ds));
        b.iter(|| {
            for term in ["c", "co", "cou", "coun", "country 4"] {
                black_box(ex.apply(ViewEvent::SearchInput(term.into())));
            }
        })
    });
}

criterion_group!(benches, bench_filter, bench_lookup);
criterion_main!(benches);
