// crates/countries-core/src/view.rs

//! # View state
//!
//! [`ViewState`] is the mutable UI state of a browsing session. It is changed
//! only through [`ViewState::apply`], one [`ViewEvent`] at a time, and is never
//! read while an event is being applied. After every event [`derive`] turns the
//! state into a complete [`RenderInstruction`]; nothing is patched
//! incrementally, the latest event always produces the whole picture.

use crate::filter::{filter_countries, normalize_term, FilterRule, MatchMode, Predicate};
use crate::lookup::CodeLookupCache;
use crate::model::{Country, Dataset};
use crate::traits::GeoBackend;
use std::sync::Arc;

/// One user interaction. Every event is legal in every state.
#[derive(Debug, Clone)]
pub enum ViewEvent<B: GeoBackend> {
    /// Search box input; stored lower-cased.
    SearchInput(String),
    /// Region picker selection. `None` or an empty string clears the region.
    /// Choosing from the picker also closes the filter menu.
    SelectRegion(Option<String>),
    /// A country card or border link was activated.
    ShowDetail(Arc<Country<B>>),
    /// Leave the detail view.
    Back,
    ToggleFilterMenu,
    /// The filter menu lost focus.
    CloseFilterMenu,
}

/// Mutable UI state: search term, region, detail selection, menu flag.
#[derive(Debug, Clone)]
pub struct ViewState<B: GeoBackend> {
    search_term: String,
    selected_region: Option<String>,
    detail: Option<Arc<Country<B>>>,
    filter_menu_open: bool,
}

impl<B: GeoBackend> Default for ViewState<B> {
    fn default() -> Self {
        ViewState {
            search_term: String::new(),
            selected_region: None,
            detail: None,
            filter_menu_open: false,
        }
    }
}

impl<B: GeoBackend> ViewState<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event in place.
    pub fn apply(&mut self, event: ViewEvent<B>) {
        match event {
            ViewEvent::SearchInput(text) => self.search_term = normalize_term(&text),
            ViewEvent::SelectRegion(region) => {
                self.selected_region = region.filter(|r| !r.is_empty());
                self.filter_menu_open = false;
            }
            ViewEvent::ShowDetail(country) => self.detail = Some(country),
            ViewEvent::Back => self.detail = None,
            ViewEvent::ToggleFilterMenu => self.filter_menu_open = !self.filter_menu_open,
            ViewEvent::CloseFilterMenu => self.filter_menu_open = false,
        }
    }

    /// The stored (lower-cased) search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    pub fn detail(&self) -> Option<&Arc<Country<B>>> {
        self.detail.as_ref()
    }

    pub fn filter_menu_open(&self) -> bool {
        self.filter_menu_open
    }

    /// The filter rule the current search term and region select.
    pub fn filter_rule(&self) -> FilterRule<'_> {
        FilterRule::new(&self.search_term, self.selected_region())
    }
}

/// What the renderer should draw.
#[derive(Debug, Clone)]
pub enum View<B: GeoBackend> {
    /// Grid of the countries passing the current filter, in dataset order.
    List { countries: Vec<Arc<Country<B>>> },
    /// One country plus its resolvable neighbours.
    Detail {
        country: Arc<Country<B>>,
        borders: Vec<Arc<Country<B>>>,
    },
    /// List view with nothing passing the filter.
    Empty,
}

/// The complete per-interaction output handed to a renderer: the active view
/// plus the control values to reflect (search box, region picker, menu).
#[derive(Debug, Clone)]
pub struct RenderInstruction<B: GeoBackend> {
    pub view: View<B>,
    pub search_term: String,
    pub selected_region: Option<String>,
    pub filter_menu_open: bool,
    pub regions: Vec<String>,
}

impl<B: GeoBackend> RenderInstruction<B> {
    /// `"list"`, `"detail"` or `"empty"`.
    pub fn kind(&self) -> &'static str {
        match self.view {
            View::List { .. } => "list",
            View::Detail { .. } => "detail",
            View::Empty => "empty",
        }
    }

    /// Countries shown in the list view; empty for the other views.
    pub fn visible(&self) -> &[Arc<Country<B>>] {
        match &self.view {
            View::List { countries } => countries,
            _ => &[],
        }
    }

    pub fn visible_names(&self) -> Vec<&str> {
        self.visible().iter().map(|c| c.name()).collect()
    }

    pub fn detail_country(&self) -> Option<&Arc<Country<B>>> {
        match &self.view {
            View::Detail { country, .. } => Some(country),
            _ => None,
        }
    }

    /// Resolved border links of the detail view; empty for the other views.
    pub fn border_countries(&self) -> &[Arc<Country<B>>] {
        match &self.view {
            View::Detail { borders, .. } => borders,
            _ => &[],
        }
    }
}

/// Derives the render instruction for `state`.
///
/// A detail selection wins over the list. Otherwise the filter rule of the
/// state is applied to the whole dataset; no match yields [`View::Empty`].
pub fn derive<B: GeoBackend>(
    state: &ViewState<B>,
    dataset: &Arc<Dataset<B>>,
    lookup: &mut CodeLookupCache<B>,
    regions: &[String],
    mode: MatchMode,
) -> RenderInstruction<B> {
    let view = match state.detail() {
        Some(country) => View::Detail {
            borders: lookup.resolve_borders(dataset, country),
            country: Arc::clone(country),
        },
        None => {
            let predicate: Predicate<'_, B> = state.filter_rule().into_predicate(mode);
            let countries = filter_countries(dataset, predicate);
            if countries.is_empty() {
                View::Empty
            } else {
                View::List { countries }
            }
        }
    };

    RenderInstruction {
        view,
        search_term: state.search_term.clone(),
        selected_region: state.selected_region.clone(),
        filter_menu_open: state.filter_menu_open,
        regions: regions.to_vec(),
    }
}
