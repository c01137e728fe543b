//! countries-core prelude: bring common types and traits into scope.

pub use crate::api::RenderPayload;
pub use crate::error::{CountryError, Result};
pub use crate::explorer::Explorer;
pub use crate::filter::{build_predicate, filter_countries, FilterRule, MatchMode};
pub use crate::lookup::CodeLookupCache;
pub use crate::model::{
    Country, Dataset, DefaultBackend, DefaultDataset, Named, StandardBackend,
};
pub use crate::region::regions;
pub use crate::traits::{GeoBackend, NameMatch};
pub use crate::view::{RenderInstruction, View, ViewEvent, ViewState};
