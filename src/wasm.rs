//! WASM bindings for rendering rich text in the browser or at build time.
//!
//! This module exposes the render-to-markup call to JavaScript via
//! wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::document::RichText;
use crate::render::{RenderOptions, render_rich_text};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render a rich-text field (JSON string) to XHTML.
///
/// `base_url` is the site's own URL; links under it open in the same tab.
#[wasm_bindgen(js_name = renderRichText)]
pub fn render_to_xhtml(json: &str, base_url: Option<String>) -> Result<String, JsValue> {
    let rich_text = RichText::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut options = RenderOptions::new();
    if let Some(base_url) = base_url {
        options = options.with_base_url(base_url);
    }

    Ok(render_rich_text(&rich_text, &options).to_xhtml())
}

/// Extract the plain text of a rich-text field (JSON string).
#[wasm_bindgen(js_name = richTextToPlain)]
pub fn render_to_text(json: &str) -> Result<String, JsValue> {
    let rich_text = RichText::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(render_rich_text(&rich_text, &RenderOptions::default()).to_text())
}
