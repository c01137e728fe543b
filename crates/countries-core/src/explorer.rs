// crates/countries-core/src/explorer.rs
use crate::filter::MatchMode;
use crate::lookup::CodeLookupCache;
use crate::model::{Country, Dataset};
use crate::region::regions;
use crate::traits::GeoBackend;
use crate::view::{derive, RenderInstruction, ViewEvent, ViewState};
use once_cell::unsync::OnceCell;
use std::sync::Arc;

/// A browsing session over one dataset.
///
/// The explorer is the single owner of the view state and of everything
/// derived from the dataset (code lookup, region list). Each call to
/// [`Explorer::apply`] mutates the state once and returns a freshly derived
/// [`RenderInstruction`].
pub struct Explorer<B: GeoBackend> {
    dataset: Arc<Dataset<B>>,
    state: ViewState<B>,
    lookup: CodeLookupCache<B>,
    /// Computed on first use; reset when the dataset is replaced.
    regions: OnceCell<Vec<String>>,
    mode: MatchMode,
}

impl<B: GeoBackend> Explorer<B> {
    pub fn new(dataset: impl Into<Arc<Dataset<B>>>) -> Self {
        Explorer {
            dataset: dataset.into(),
            state: ViewState::new(),
            lookup: CodeLookupCache::new(),
            regions: OnceCell::new(),
            mode: MatchMode::default(),
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Applies one event and re-derives the whole view.
    pub fn apply(&mut self, event: ViewEvent<B>) -> RenderInstruction<B> {
        tracing::trace!(?event, "applying view event");
        self.state.apply(event);
        self.render()
    }

    /// Derives the view for the current state without changing it.
    pub fn render(&mut self) -> RenderInstruction<B> {
        let dataset = &self.dataset;
        let region_list = self.regions.get_or_init(|| regions(dataset));
        derive(&self.state, dataset, &mut self.lookup, region_list, self.mode)
    }

    /// Opens the detail view of the country with `code`.
    ///
    /// Codes are matched exactly first, then upper-cased. A code with no
    /// record leaves the state untouched and returns `false`.
    pub fn open_code(&mut self, code: &str) -> bool {
        match self.resolve(code) {
            Some(country) => {
                self.state.apply(ViewEvent::ShowDetail(country));
                true
            }
            None => {
                tracing::debug!(code, "no country for code");
                false
            }
        }
    }

    /// Resolves a code through the lookup cache.
    pub fn resolve(&mut self, code: &str) -> Option<Arc<Country<B>>> {
        let code = code.trim();
        self.lookup
            .resolve(&self.dataset, code)
            .or_else(|| self.lookup.resolve(&self.dataset, &code.to_ascii_uppercase()))
    }

    /// Swaps in another dataset.
    ///
    /// The lookup cache and region list are rebuilt lazily for the new
    /// dataset. Search term and region are kept; an open detail view follows
    /// its code into the new dataset, or closes if the code is gone.
    pub fn replace_dataset(&mut self, dataset: impl Into<Arc<Dataset<B>>>) {
        self.dataset = dataset.into();
        self.regions = OnceCell::new();
        tracing::debug!(countries = self.dataset.len(), "dataset replaced");

        let code = self.state.detail().map(|c| c.code().to_owned());
        if let Some(code) = code {
            let event = match self.lookup.resolve(&self.dataset, &code) {
                Some(country) => ViewEvent::ShowDetail(country),
                None => ViewEvent::Back,
            };
            self.state.apply(event);
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset<B>> {
        &self.dataset
    }

    pub fn state(&self) -> &ViewState<B> {
        &self.state
    }

    /// Sorted distinct regions of the current dataset.
    pub fn regions(&self) -> &[String] {
        self.regions.get_or_init(|| regions(&self.dataset))
    }

    /// How many times the code lookup has been rebuilt.
    pub fn lookup_rebuilds(&self) -> usize {
        self.lookup.rebuilds()
    }
}
