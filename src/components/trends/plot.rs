use js_sys::{Array, JSON};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Hand pre-serialized traces, layout and config to the page-level Plotly
/// bundle. Traces are JSON strings produced from `plotly` crate builders.
pub fn draw(div_id: &str, trace_json: &[String], layout_json: &str, config_json: &str) {
    let data = Array::new();
    for trace in trace_json {
        match JSON::parse(trace) {
            Ok(value) => {
                data.push(&value);
            }
            Err(err) => log::error!("Failed to parse trace JSON: {:?}", err),
        }
    }

    let layout = JSON::parse(layout_json).unwrap_or(JsValue::NULL);
    let config = JSON::parse(config_json).unwrap_or(JsValue::NULL);

    log::trace!("Drawing plot into #{} ({} traces)", div_id, data.length());
    newPlot(div_id, data.into(), layout, config);
}
