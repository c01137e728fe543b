//! Property-based tests for the filter, region and lookup invariants.
//!
//! Tests validate:
//! 1. Term / region / combined predicates select exactly the expected subsets
//! 2. The region index is idempotent, unique, non-empty-valued and sorted
//! 3. The lookup cache is keyed by dataset identity

use countries_core::prelude::*;
use countries_core::filter::Predicate;
use proptest::prelude::*;
use std::sync::Arc;

type B = DefaultBackend;

fn arb_dataset() -> impl Strategy<Value = Dataset<B>> {
    let region = prop::sample::select(vec!["", "Europe", "Asia", "Africa", "europe"]);
    prop::collection::vec(("[A-Za-z ]{0,10}", region), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, region))| {
                Country::new(&name, &format!("C{i:02}")).with_region(region)
            })
            .collect::<Dataset<B>>()
    })
}

fn pred<'a>(term: &'a str, region: Option<&'a str>) -> Predicate<'a, B> {
    build_predicate(term, region)
}

fn codes(list: &[Arc<Country<B>>]) -> Vec<String> {
    list.iter().map(|c| c.code().to_owned()).collect()
}

// ===== Property 1: Predicates =====

proptest! {
    #[test]
    fn term_filter_is_lowercase_substring(ds in arb_dataset(), q in "[A-Za-z]{0,3}") {
        let term = q.to_lowercase();
        let got = filter_countries(&ds, pred(&term, None));
        let expected: Vec<_> = ds
            .countries()
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&term))
            .cloned()
            .collect();
        prop_assert_eq!(codes(&got), codes(&expected));
        if term.is_empty() {
            prop_assert_eq!(got.len(), ds.len());
        }
    }

    #[test]
    fn region_filter_is_exact(ds in arb_dataset(), r in prop::sample::select(vec!["Europe", "Asia", "Africa", "Oceania"])) {
        let got = filter_countries(&ds, pred("", Some(r)));
        prop_assert!(got.iter().all(|c| c.region() == r));
        let expected = ds.countries().iter().filter(|c| c.region() == r).count();
        prop_assert_eq!(got.len(), expected);
    }

    #[test]
    fn combined_filter_is_the_intersection(
        ds in arb_dataset(),
        q in "[a-z]{0,2}",
        r in prop::sample::select(vec!["Europe", "Asia", "Africa"]),
    ) {
        let by_term = codes(&filter_countries(&ds, pred(&q, None)));
        let by_region = codes(&filter_countries(&ds, pred("", Some(r))));
        let both = codes(&filter_countries(&ds, pred(&q, Some(r))));

        let expected: Vec<_> = by_term.iter().filter(|c| by_region.contains(c)).cloned().collect();
        prop_assert_eq!(both, expected);
    }
}

// ===== Property 2: Region index =====

proptest! {
    #[test]
    fn regions_are_sorted_unique_and_non_empty(ds in arb_dataset()) {
        let first = regions(&ds);
        prop_assert_eq!(&first, &regions(&ds));
        prop_assert!(first.iter().all(|r| !r.is_empty()));
        prop_assert!(first.windows(2).all(|w| w[0] < w[1]));
        for c in ds.countries() {
            if !c.region().is_empty() {
                prop_assert!(first.iter().any(|r| r == c.region()));
            }
        }
    }
}

// ===== Property 3: Lookup identity =====

proptest! {
    #[test]
    fn lookup_hits_by_identity_and_rebuilds_on_change(ds in arb_dataset(), other in arb_dataset()) {
        let ds = Arc::new(ds);
        let mut cache = CodeLookupCache::new();

        let first = cache.lookup(&ds) as *const _;
        let rebuilds = cache.rebuilds();
        let second = cache.lookup(&ds) as *const _;
        if !ds.is_empty() {
            prop_assert_eq!(first, second);
            prop_assert_eq!(cache.rebuilds(), rebuilds);
        }

        let other = Arc::new(other);
        let map = cache.lookup(&other);
        prop_assert_eq!(map.len(), other.len());
        for c in other.countries() {
            prop_assert!(map.get(c.code()).is_some_and(|hit| Arc::ptr_eq(hit, c)));
        }
    }
}
