// crates/countries-core/src/region.rs
use crate::model::Dataset;
use crate::traits::GeoBackend;
use std::collections::BTreeSet;

/// Distinct, non-empty region names of a dataset, sorted ascending.
///
/// Pure function of the dataset; an empty dataset yields an empty list.
///
/// ```
/// use countries_core::{regions, Country, Dataset, DefaultBackend};
///
/// let ds: Dataset<DefaultBackend> = Dataset::new(vec![
///     Country::new("Peru", "PER").with_region("Americas"),
///     Country::new("Antarctica", "ATA"),
///     Country::new("Chile", "CHL").with_region("Americas"),
///     Country::new("Kenya", "KEN").with_region("Africa"),
/// ]);
/// assert_eq!(regions(&ds), vec!["Africa", "Americas"]);
/// ```
pub fn regions<B: GeoBackend>(dataset: &Dataset<B>) -> Vec<String> {
    let distinct: BTreeSet<&str> = dataset
        .countries()
        .iter()
        .map(|c| c.region())
        .filter(|r| !r.is_empty())
        .collect();

    let out: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
    tracing::debug!(regions = out.len(), "region index computed");
    out
}
