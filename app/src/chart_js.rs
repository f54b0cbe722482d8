//! Chart.js interop
//!
//! Renders chart configurations with the page's global `Chart` constructor.
//! The tooltip label callback is one shared closure that formats lines with
//! the core tooltip formatter.

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use benchboard_core::{
    ChartBackend, ChartHandle, DataPoint, RenderError, RenderRequest, tooltip_lines,
};

use crate::dom::WebNode;

// ─────────────────────────────────────────────────────────────────────────────
// Raw Chart.js Bindings
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(item: &web_sys::Element, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

fn library_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Walk an object path that is known to exist
fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = root.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tooltip Callback
// ─────────────────────────────────────────────────────────────────────────────

type LabelCallback = Closure<dyn Fn(JsValue) -> JsValue>;

/// Label callback body: `context` is the tooltip item of the hovered point
fn tooltip_label(context: JsValue) -> JsValue {
    let formatted = js_sys::Reflect::get(&context, &JsValue::from_str("formattedValue"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let raw = js_sys::Reflect::get(&context, &JsValue::from_str("raw"))
        .ok()
        .and_then(|v| serde_wasm_bindgen::from_value::<serde_json::Value>(v).ok())
        .unwrap_or(serde_json::Value::Null);

    tooltip_lines(&DataPoint::from_raw(formatted, &raw))
        .into_iter()
        .map(JsValue::from)
        .collect::<js_sys::Array>()
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend
// ─────────────────────────────────────────────────────────────────────────────

pub struct ChartJsHandle {
    chart: Chart,
    // Chart.js calls back into this closure while the chart lives
    _label: Rc<LabelCallback>,
}

impl ChartHandle for ChartJsHandle {
    fn destroy(&mut self) {
        self.chart.destroy();
    }
}

#[derive(Clone)]
pub struct ChartJsBackend {
    label: Rc<LabelCallback>,
}

impl Default for ChartJsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartJsBackend {
    pub fn new() -> Self {
        Self {
            label: Rc::new(Closure::new(tooltip_label)),
        }
    }

    fn to_js(&self, request: RenderRequest) -> Result<JsValue, RenderError> {
        let mut config = request.config;
        if request.tooltip && config.tooltip_callbacks_mut().is_none() {
            return Err(RenderError::Config {
                reason: "tooltip options are not objects".to_string(),
            });
        }

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = config
            .into_value()
            .serialize(&serializer)
            .map_err(|e| RenderError::Config {
                reason: e.to_string(),
            })?;

        if request.tooltip {
            let callbacks = get_path(&value, &["options", "plugins", "tooltip", "callbacks"])
                .ok_or_else(|| RenderError::Config {
                    reason: "tooltip callbacks missing after conversion".to_string(),
                })?;
            js_sys::Reflect::set(
                &callbacks,
                &JsValue::from_str("label"),
                (*self.label).as_ref(),
            )
            .map_err(|e| RenderError::Config {
                reason: format!("{e:?}"),
            })?;
        }
        Ok(value)
    }
}

impl ChartBackend<WebNode> for ChartJsBackend {
    type Handle = ChartJsHandle;

    fn render(&self, container: &WebNode, request: RenderRequest) -> Result<ChartJsHandle, RenderError> {
        if !library_loaded() {
            return Err(RenderError::LibraryMissing);
        }
        let config = self.to_js(request)?;
        let chart = Chart::new(container.element(), &config).map_err(|e| RenderError::Construct {
            reason: e.as_string().unwrap_or_else(|| format!("{e:?}")),
        })?;
        Ok(ChartJsHandle {
            chart,
            _label: Rc::clone(&self.label),
        })
    }
}
