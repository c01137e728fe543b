// crates/countries-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats). `unresolved_borders`
/// counts border codes that name no record in the same dataset; those links
/// are left out of every detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub regions: usize,
    pub border_links: usize,
    pub unresolved_borders: usize,
}
