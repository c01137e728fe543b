// crates/countries-core/src/lookup.rs

//! Country-code lookup, memoized per dataset identity.
//!
//! The cache remembers which dataset allocation it was built from. It is only
//! rebuilt when it is asked about a *different* allocation (pointer identity,
//! not value equality) or when the built map is empty. Two datasets with equal
//! contents but distinct `Arc`s therefore each trigger a rebuild.

use crate::model::{Country, Dataset};
use crate::traits::GeoBackend;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Code → country mapping handed out by [`CodeLookupCache::lookup`].
pub type CodeMap<B> = HashMap<String, Arc<Country<B>>>;

/// Memoized code → country mapping.
///
/// The source dataset is held as a [`Weak`] pointer: the cache never keeps a
/// replaced dataset's records alive, and the allocation cannot be reused for
/// a new dataset while the weak pointer exists, so an address match always
/// means the same dataset.
#[derive(Debug)]
pub struct CodeLookupCache<B: GeoBackend> {
    source: Weak<Dataset<B>>,
    by_code: CodeMap<B>,
    rebuilds: usize,
}

impl<B: GeoBackend> Default for CodeLookupCache<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GeoBackend> CodeLookupCache<B> {
    pub fn new() -> Self {
        CodeLookupCache {
            source: Weak::new(),
            by_code: HashMap::new(),
            rebuilds: 0,
        }
    }

    /// Returns the mapping for `dataset`, rebuilding it first if the cache was
    /// built from another dataset or is empty.
    pub fn lookup(&mut self, dataset: &Arc<Dataset<B>>) -> &CodeMap<B> {
        if !self.is_built_from(dataset) || self.by_code.is_empty() {
            self.rebuild(dataset);
        }
        &self.by_code
    }

    /// Resolves one code; a miss is `None`, never an error.
    pub fn resolve(&mut self, dataset: &Arc<Dataset<B>>, code: &str) -> Option<Arc<Country<B>>> {
        self.lookup(dataset).get(code).cloned()
    }

    /// The border records of `country`, in border order. Codes with no record
    /// in `dataset` are left out.
    pub fn resolve_borders(
        &mut self,
        dataset: &Arc<Dataset<B>>,
        country: &Country<B>,
    ) -> Vec<Arc<Country<B>>> {
        let by_code = self.lookup(dataset);
        country
            .borders()
            .filter_map(|code| by_code.get(code).cloned())
            .collect()
    }

    /// Whether the current mapping was built from this exact allocation.
    pub fn is_built_from(&self, dataset: &Arc<Dataset<B>>) -> bool {
        std::ptr::eq(self.source.as_ptr(), Arc::as_ptr(dataset))
    }

    /// How many times the mapping has been (re)built.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    fn rebuild(&mut self, dataset: &Arc<Dataset<B>>) {
        self.source = Arc::downgrade(dataset);
        self.by_code.clear();
        // later duplicates overwrite earlier ones
        for country in dataset.countries() {
            self.by_code
                .insert(country.code().to_owned(), Arc::clone(country));
        }
        self.rebuilds += 1;
        tracing::debug!(
            countries = dataset.len(),
            codes = self.by_code.len(),
            rebuilds = self.rebuilds,
            "code lookup rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    fn dataset() -> Arc<Dataset<DefaultBackend>> {
        Arc::new(Dataset::new(vec![
            Country::new("Germany", "DEU").with_borders(&["FRA", "POL"]),
            Country::new("France", "FRA").with_borders(&["DEU"]),
        ]))
    }

    #[test]
    fn same_dataset_hits_the_cache() {
        let ds = dataset();
        let mut cache = CodeLookupCache::new();
        let first = cache.lookup(&ds) as *const CodeMap<DefaultBackend>;
        let second = cache.lookup(&ds) as *const CodeMap<DefaultBackend>;
        assert_eq!(first, second);
        assert_eq!(cache.rebuilds(), 1);
    }

    #[test]
    fn equal_but_distinct_dataset_rebuilds() {
        let mut cache = CodeLookupCache::new();
        cache.lookup(&dataset());
        let other = dataset();
        assert!(!cache.is_built_from(&other));
        cache.lookup(&other);
        assert_eq!(cache.rebuilds(), 2);
        assert!(cache.is_built_from(&other));
    }

    #[test]
    fn empty_dataset_rebuilds_every_time() {
        let ds = Arc::new(Dataset::<DefaultBackend>::default());
        let mut cache = CodeLookupCache::new();
        assert!(cache.lookup(&ds).is_empty());
        assert!(cache.lookup(&ds).is_empty());
        assert_eq!(cache.rebuilds(), 2);
    }

    #[test]
    fn duplicate_codes_keep_the_last_record() {
        let ds = Arc::new(Dataset::<DefaultBackend>::new(vec![
            Country::new("First", "DUP"),
            Country::new("Second", "DUP"),
        ]));
        let mut cache = CodeLookupCache::new();
        assert_eq!(cache.lookup(&ds).len(), 1);
        assert_eq!(cache.resolve(&ds, "DUP").map(|c| c.name().to_owned()), Some("Second".into()));
    }

    #[test]
    fn border_misses_are_omitted() {
        let ds = dataset();
        let mut cache = CodeLookupCache::new();
        let germany = Arc::clone(&ds.countries()[0]);
        let borders = cache.resolve_borders(&ds, &germany);
        let names: Vec<_> = borders.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["France"]);
        assert!(cache.resolve(&ds, "POL").is_none());
    }
}
