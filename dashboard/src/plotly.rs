//! Binding to the Plotly charting collaborator loaded by index.html
//!
//! Figures are forwarded exactly as the backend encoded them; the
//! dashboard never looks inside a figure.

use js_sys::JSON;
use query_lens_core::ChartSpec;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(container_id: &str, figure: &JsValue) -> Result<(), JsValue>;
}

/// Plot `spec` into the container with the given id, replacing any
/// previous plot there
pub fn render(container_id: &str, spec: &ChartSpec) -> Result<(), JsValue> {
    let encoded = serde_json::to_string(spec.figure())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let figure = JSON::parse(&encoded)?;
    new_plot(container_id, &figure)
}
