//! countries-wasm: WebAssembly bindings for countries-core
//!
//! Exposes one class, `Explorer`, that owns a browsing session. Every
//! method applies one interaction and returns the full render payload, so
//! the page only ever re-draws from what it was handed.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Explorer } from 'countries-wasm';
//!
//! async function main() {
//!   await init();
//!   const ex = Explorer.bundled();
//!   draw(ex.render());
//!   search.oninput = (e) => draw(ex.input(e.target.value));
//!   regionSelect.onchange = (e) => draw(ex.select_region(e.target.value));
//! }
//! main();
//! ```
//!
//! Payload shape
//! -------------
//! `{ view: "list", countries: [...], controls }`,
//! `{ view: "detail", country: {..., borders: [{code, name}]}, controls }` or
//! `{ view: "empty", controls }`, where `controls` carries `search_term`,
//! `selected_region`, `filter_menu_open` and `regions`.
use countries_core::api::RenderPayload;
use countries_core::{DefaultBackend, DefaultDataset, RenderInstruction, ViewEvent};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

static BUNDLED_JSON: &str = include_str!("../../countries-core/data/countries.json");

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing countries WASM module...");
}

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// A browsing session. Construct with `new Explorer(json)` or
/// `Explorer.bundled()`.
#[wasm_bindgen(js_name = Explorer)]
pub struct WebExplorer {
    inner: countries_core::Explorer<DefaultBackend>,
}

#[wasm_bindgen(js_class = Explorer)]
impl WebExplorer {
    /// Parses a JSON array of country records.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<WebExplorer, JsError> {
        let dataset = DefaultDataset::from_json_str(json)?;
        log(&format!("✓ Loaded {} countries", dataset.len()));
        Ok(WebExplorer {
            inner: countries_core::Explorer::new(dataset),
        })
    }

    /// Session over the sample dataset compiled into the module.
    pub fn bundled() -> Result<WebExplorer, JsError> {
        Self::new(BUNDLED_JSON)
    }

    /// Search box input.
    pub fn input(&mut self, text: String) -> Result<JsValue, JsError> {
        self.apply(ViewEvent::SearchInput(text))
    }

    /// Region menu choice; `""`, `null` or `undefined` clear the filter.
    pub fn select_region(&mut self, value: Option<String>) -> Result<JsValue, JsError> {
        self.apply(ViewEvent::SelectRegion(value))
    }

    /// Opens a detail view by code (cards and border links carry the code).
    /// Unknown codes leave the view as it was.
    pub fn open(&mut self, code: &str) -> Result<JsValue, JsError> {
        if !self.inner.open_code(code) {
            log(&format!("no country for code {code}"));
        }
        self.render()
    }

    pub fn back(&mut self) -> Result<JsValue, JsError> {
        self.apply(ViewEvent::Back)
    }

    pub fn toggle_menu(&mut self) -> Result<JsValue, JsError> {
        self.apply(ViewEvent::ToggleFilterMenu)
    }

    /// Outside click / blur of the region menu.
    pub fn close_menu(&mut self) -> Result<JsValue, JsError> {
        self.apply(ViewEvent::CloseFilterMenu)
    }

    /// Sorted distinct regions, for populating the menu.
    pub fn regions(&self) -> js_sys::Array {
        self.inner
            .regions()
            .iter()
            .map(|r| JsValue::from_str(r))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.inner.dataset().len()
    }

    /// Current payload without changing anything.
    pub fn render(&mut self) -> Result<JsValue, JsError> {
        let out = self.inner.render();
        to_js(&out)
    }
}

impl WebExplorer {
    fn apply(&mut self, event: ViewEvent<DefaultBackend>) -> Result<JsValue, JsError> {
        let out = self.inner.apply(event);
        to_js(&out)
    }
}

// Plain objects and `null` instead of `Map` and `undefined`.
fn to_js(out: &RenderInstruction<DefaultBackend>) -> Result<JsValue, JsError> {
    Ok(RenderPayload::new(out).serialize(&Serializer::json_compatible())?)
}
