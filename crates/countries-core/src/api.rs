// crates/countries-core/src/api.rs

//! Serializable views of a [`RenderInstruction`] for renderers that consume
//! JSON (the browser bindings, `--json` output).

use crate::model::Country;
use crate::text::{format_population, join_non_empty};
use crate::traits::GeoBackend;
use crate::view::{RenderInstruction, View};
use serde::Serialize;

/// A card in the list view.
#[derive(Debug, Clone, Serialize)]
pub struct CountryCard<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub flag: &'a str,
    pub population: u64,
    pub population_display: String,
    pub region: &'a str,
    pub capital: &'a str,
}

impl<'a> CountryCard<'a> {
    pub fn new<B: GeoBackend>(c: &'a Country<B>) -> Self {
        CountryCard {
            name: c.name(),
            code: c.code(),
            flag: c.flag(),
            population: c.population(),
            population_display: format_population(c.population()),
            region: c.region(),
            capital: c.capital(),
        }
    }
}

/// A border quick link in the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct BorderLink<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// The full record shown in the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct CountryDetail<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub flag: &'a str,
    pub native_name: &'a str,
    pub population: u64,
    pub population_display: String,
    pub region: &'a str,
    pub subregion: &'a str,
    pub capital: &'a str,
    pub top_level_domains: String,
    pub currencies: String,
    pub languages: String,
    pub borders: Vec<BorderLink<'a>>,
}

impl<'a> CountryDetail<'a> {
    pub fn new<B: GeoBackend>(c: &'a Country<B>, borders: &'a [std::sync::Arc<Country<B>>]) -> Self {
        CountryDetail {
            name: c.name(),
            code: c.code(),
            flag: c.flag(),
            native_name: c.native_name(),
            population: c.population(),
            population_display: format_population(c.population()),
            region: c.region(),
            subregion: c.subregion(),
            capital: c.capital(),
            top_level_domains: join_non_empty(c.top_level_domains()),
            currencies: join_non_empty(c.currency_names()),
            languages: join_non_empty(c.language_names()),
            borders: borders
                .iter()
                .map(|b| BorderLink {
                    code: b.code(),
                    name: b.name(),
                })
                .collect(),
        }
    }
}

/// The active view, tagged by `view`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewPayload<'a> {
    List { countries: Vec<CountryCard<'a>> },
    Detail { country: CountryDetail<'a> },
    Empty,
}

/// JSON shape of a whole [`RenderInstruction`].
///
/// ```
/// use countries_core::api::RenderPayload;
/// use countries_core::prelude::*;
///
/// let ds = Dataset::<DefaultBackend>::new(vec![
///     Country::new("Germany", "DEU").with_region("Europe").with_population(83_240_525),
/// ]);
/// let out = Explorer::new(ds).render();
/// let json = serde_json::to_value(RenderPayload::new(&out)).unwrap();
/// assert_eq!(json["view"], "list");
/// assert_eq!(json["countries"][0]["population_display"], "83,240,525");
/// assert_eq!(json["controls"]["regions"][0], "Europe");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload<'a> {
    #[serde(flatten)]
    pub view: ViewPayload<'a>,
    pub controls: Controls<'a>,
}

/// Control values the renderer reflects back into its inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Controls<'a> {
    pub search_term: &'a str,
    pub selected_region: Option<&'a str>,
    pub filter_menu_open: bool,
    pub regions: &'a [String],
}

impl<'a> RenderPayload<'a> {
    pub fn new<B: GeoBackend>(out: &'a RenderInstruction<B>) -> Self {
        let view = match &out.view {
            View::List { countries } => ViewPayload::List {
                countries: countries.iter().map(|c| CountryCard::new(c)).collect(),
            },
            View::Detail { country, borders } => ViewPayload::Detail {
                country: CountryDetail::new(country, borders),
            },
            View::Empty => ViewPayload::Empty,
        };

        RenderPayload {
            view,
            controls: Controls {
                search_term: &out.search_term,
                selected_region: out.selected_region.as_deref(),
                filter_menu_open: out.filter_menu_open,
                regions: &out.regions,
            },
        }
    }
}
