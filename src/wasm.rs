//! WASM bindings for bracket-drawer.
//!
//! Exposes `renderSvg` and `renderText` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{DrawRequest, Format, RegionSeeding, RenderConfig, render_rosters};

fn render(
    size: u32,
    left_csv: &str,
    right_csv: &str,
    title: &str,
    format: Format,
) -> Result<String, JsError> {
    let request = DrawRequest {
        title: (!title.is_empty()).then(|| title.to_string()),
        ..DrawRequest::default()
    };
    let seeding = RegionSeeding::default();
    render_rosters(
        size,
        left_csv,
        right_csv,
        (&seeding, &seeding),
        request,
        format,
        &RenderConfig::default(),
    )
    .map_err(|e| JsError::new(&e.to_string()))
}

/// Render two CSV rosters to an SVG document.
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(size: u32, left_csv: &str, right_csv: &str, title: &str) -> Result<String, JsError> {
    render(size, left_csv, right_csv, title, Format::Svg)
}

/// Render two CSV rosters to Unicode text.
#[wasm_bindgen(js_name = "renderText")]
pub fn render_text(size: u32, left_csv: &str, right_csv: &str, title: &str) -> Result<String, JsError> {
    render(size, left_csv, right_csv, title, Format::Text)
}
