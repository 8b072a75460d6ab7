use lathe_sketch::{image::SvgOpts, Canvas, Page};
use wasm_bindgen::prelude::*;

/// The markup of the reference page, ready to be set as some element's `innerHTML`
#[wasm_bindgen]
pub fn page_markup() -> String {
    Page.markup()
}

/// The `<svg>` for a canvas of any size.  `width` and `height` may be anything that parses as a
/// number.
#[wasm_bindgen]
pub fn canvas_markup(width: &str, height: &str) -> Result<String, JsValue> {
    let canvas = Canvas::new(width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(canvas.compose().svg_string(&SvgOpts::default()))
}
