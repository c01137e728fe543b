// crates/countries-core/src/lib.rs

//! # countries-core
//!
//! The filter / lookup / render-state core of a country directory.
//!
//! A [`Dataset`] of [`Country`] records is loaded once. User interactions are
//! expressed as [`ViewEvent`]s and applied to an [`Explorer`], which mutates its
//! [`ViewState`] and re-derives a complete [`RenderInstruction`] after every
//! event. Renderers (terminal, browser) only ever draw that instruction.
//!
//! ```
//! use countries_core::prelude::*;
//!
//! let json = r#"[
//!   {"name": "Germany", "region": "Europe", "alpha3Code": "DEU", "borders": ["FRA", "POL"]},
//!   {"name": "France", "region": "Europe", "alpha3Code": "FRA", "borders": ["DEU"]}
//! ]"#;
//! let dataset = Dataset::<DefaultBackend>::from_json_str(json).unwrap();
//! let mut explorer = Explorer::new(dataset);
//!
//! let out = explorer.apply(ViewEvent::SearchInput("GER".into()));
//! assert_eq!(out.visible_names(), vec!["Germany"]);
//!
//! assert!(explorer.open_code("DEU"));
//! assert!(explorer.open_code("FRA"));
//! assert_eq!(explorer.render().detail_country().map(|c| c.name()), Some("France"));
//! ```

pub mod api;
pub mod common;
pub mod error;
pub mod explorer;
pub mod filter;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod region;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{CountryError, Result};
pub use crate::explorer::Explorer;
pub use crate::filter::{build_predicate, filter_countries, FilterRule, MatchMode};
pub use crate::lookup::{CodeLookupCache, CodeMap};
pub use crate::model::{Country, Dataset, DefaultBackend, DefaultDataset, Named, StandardBackend};
pub use crate::region::regions;
pub use crate::traits::{GeoBackend, NameMatch};
pub use crate::view::{derive, RenderInstruction, View, ViewEvent, ViewState};
