// crates/countries-core/src/filter.rs

//! Search-term and region predicates over a dataset.

use crate::model::{Country, Dataset};
use crate::text::{fold_key, lower};
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How the search term is compared against country names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Lower-cased substring match.
    #[default]
    Plain,
    /// Accent-insensitive substring match: both sides go through [`fold_key`].
    Folded,
}

/// The rule selected for a given search term and region.
///
/// Rules are tried in declaration order; an empty search term or an empty /
/// absent region does not count as "set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule<'a> {
    RegionAndTerm { region: &'a str, term: &'a str },
    Region(&'a str),
    Term(&'a str),
    All,
}

impl<'a> FilterRule<'a> {
    pub fn new(search_term: &'a str, selected_region: Option<&'a str>) -> Self {
        let region = selected_region.filter(|r| !r.is_empty());
        let term = Some(search_term).filter(|t| !t.is_empty());
        match (region, term) {
            (Some(region), Some(term)) => FilterRule::RegionAndTerm { region, term },
            (Some(region), None) => FilterRule::Region(region),
            (None, Some(term)) => FilterRule::Term(term),
            (None, None) => FilterRule::All,
        }
    }

    /// Builds the predicate for this rule.
    ///
    /// Folded matching needs the folded needle, which is computed once here
    /// rather than per record.
    pub fn into_predicate<B: GeoBackend>(self, mode: MatchMode) -> Predicate<'a, B> {
        match self {
            FilterRule::RegionAndTerm { region, term } => {
                let by_name: Predicate<'a, B> = name_matcher(term, mode);
                Box::new(move |c: &Country<B>| c.region() == region && by_name(c))
            }
            FilterRule::Region(region) => Box::new(move |c: &Country<B>| c.region() == region),
            FilterRule::Term(term) => name_matcher(term, mode),
            FilterRule::All => Box::new(|_: &Country<B>| true),
        }
    }
}

/// A boxed country predicate. Boxing lets every rule hand back a different
/// closure behind a single type.
pub type Predicate<'a, B> = Box<dyn Fn(&Country<B>) -> bool + 'a>;

fn name_matcher<'a, B: GeoBackend>(term: &'a str, mode: MatchMode) -> Predicate<'a, B> {
    match mode {
        MatchMode::Plain => Box::new(move |c: &Country<B>| c.name_contains_lower(term)),
        MatchMode::Folded => {
            let needle = fold_key(term);
            Box::new(move |c: &Country<B>| fold_key(c.name()).contains(&needle))
        }
    }
}

/// Combined predicate for a search term and an optional region, plain mode.
///
/// `search_term` is matched as given against lower-cased names, so callers
/// store it lower-cased (as [`ViewState`](crate::ViewState) does).
///
/// ```
/// use countries_core::{build_predicate, Country, DefaultBackend};
///
/// let de = Country::<DefaultBackend>::new("Germany", "DEU").with_region("Europe");
/// assert!(build_predicate::<DefaultBackend>("ger", Some("Europe"))(&de));
/// assert!(!build_predicate::<DefaultBackend>("ger", Some("Asia"))(&de));
/// assert!(build_predicate::<DefaultBackend>("", None)(&de));
/// ```
pub fn build_predicate<'a, B: GeoBackend>(
    search_term: &'a str,
    selected_region: Option<&'a str>,
) -> Predicate<'a, B> {
    FilterRule::new(search_term, selected_region).into_predicate(MatchMode::Plain)
}

/// The records of `dataset` accepted by `predicate`, in dataset order.
pub fn filter_countries<B: GeoBackend>(
    dataset: &Dataset<B>,
    predicate: impl Fn(&Country<B>) -> bool,
) -> Vec<Arc<Country<B>>> {
    dataset
        .countries()
        .iter()
        .filter(|&c| predicate(c))
        .cloned()
        .collect()
}

/// Normalizes raw search input the way it is stored.
#[inline]
pub fn normalize_term(input: &str) -> String {
    lower(input)
}
