//! benchboard browser frontend
//!
//! Loaded by every generated page. On start it reads the embedded dataset,
//! picks the page behavior from `<body data-page>`, and wires the document:
//!
//! ```text
//!   <script id="chart-data">  ──▶ Dataset ─┐
//!   window.BENCHBOARD_CONFIG  ──▶ PageConfig ├──▶ init_page(document, ChartJsBackend)
//!   <body data-page="...">    ──▶ PageKind ─┘
//! ```

mod chart_js;
mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use benchboard_core::{Dataset, DomNode, Page, init_page};
use benchboard_types::{PageConfig, PageKind};

pub use chart_js::{ChartJsBackend, ChartJsHandle};
pub use dom::WebNode;

const CONFIG_GLOBAL: &str = "BENCHBOARD_CONFIG";

thread_local! {
    // Keeps rendered charts and widget state alive for the page lifetime
    static PAGE: RefCell<Option<Page<WebNode, ChartJsBackend>>> = const { RefCell::new(None) };
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Optional config overrides from `window.BENCHBOARD_CONFIG`
fn read_config(window: &web_sys::Window) -> PageConfig {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return PageConfig::default(),
    };
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid {CONFIG_GLOBAL}, using defaults");
        PageConfig::default()
    })
}

/// Dataset embedded as JSON text in the page
fn read_dataset(document: &web_sys::Document, config: &PageConfig) -> Result<Dataset, JsValue> {
    let Some(element) = document.get_element_by_id(&config.data_element_id) else {
        tracing::warn!(id = %config.data_element_id, "No embedded dataset, charts are skipped");
        return Ok(Dataset::default());
    };
    let text = element.text_content().unwrap_or_default();
    Dataset::from_json(&text).map_err(|e| JsValue::from_str(&format!("{e}: {}", error_source(&e))))
}

fn error_source(e: &dyn std::error::Error) -> String {
    e.source().map(|s| s.to_string()).unwrap_or_default()
}

fn page_kind(document: &web_sys::Document) -> PageKind {
    let Some(attr) = document.body().and_then(|body| body.get_attribute("data-page")) else {
        return PageKind::default();
    };
    PageKind::from_attr(&attr).unwrap_or_else(|| {
        tracing::warn!(page = %attr, "Unknown page kind, using timeline");
        PageKind::default()
    })
}

fn url_param(window: &web_sys::Window, name: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Point
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // A second init (hot reload) keeps the first subscriber
    let _ = dioxus_logger::init(tracing::Level::INFO);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;

    let config = read_config(&window);
    let kind = page_kind(&document);
    let dataset = Rc::new(read_dataset(&document, &config)?);
    let url_key = url_param(&window, &config.charts.url_param);

    let root = WebNode::new(root);
    tracing::debug!(page = kind.label(), charts = dataset.len(), id = %root.id(), "Starting page");

    let page = init_page(
        &root,
        kind,
        &config,
        dataset,
        ChartJsBackend::new(),
        url_key.as_deref(),
    );
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Destroy every chart the page rendered and drop its widget state.
#[wasm_bindgen]
pub fn teardown() {
    PAGE.with(|slot| {
        if let Some(mut page) = slot.borrow_mut().take() {
            page.charts.dispose_all();
            if let Some(switchers) = page.switchers {
                switchers.charts.borrow_mut().dispose_all();
            }
        }
    });
}
