//! # kirjo
//!
//! Renders CMS rich-text documents (pages, ingresses, blog posts) into
//! presentation trees and XHTML.
//!
//! ## Features
//!
//! - Typed decoding of the CMS rich-text JSON (`{ json, links }`)
//! - Headings, paragraphs, lists, quotes, rules, tables with cell spans,
//!   embedded images and hyperlinks
//! - Bold, italic, underline, code, superscript and subscript marks
//! - Internal/external link policy driven by the site base URL
//! - Pure and synchronous: no I/O during rendering, safe to run in parallel
//!
//! ## Quick Start
//!
//! ```
//! use kirjo::{RenderOptions, RichText, render_rich_text};
//!
//! let rich_text = RichText::from_json(r#"{
//!     "json": {
//!         "nodeType": "document",
//!         "content": [{
//!             "nodeType": "paragraph",
//!             "content": [
//!                 { "nodeType": "text", "value": "Lue ", "marks": [] },
//!                 {
//!                     "nodeType": "hyperlink",
//!                     "data": { "uri": "https://example.com/blogi/pennut" },
//!                     "content": [{ "nodeType": "text", "value": "blogista", "marks": [] }]
//!                 }
//!             ]
//!         }]
//!     },
//!     "links": { "assets": { "block": [] } }
//! }"#)?;
//!
//! let options = RenderOptions::new().with_base_url("https://example.com");
//! let rendered = render_rich_text(&rich_text, &options);
//!
//! assert_eq!(
//!     rendered.to_xhtml(),
//!     r#"<p>Lue <a href="https://example.com/blogi/pennut">blogista</a></p>"#
//! );
//! # Ok::<(), kirjo::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod render;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{Asset, Document, Links, Mark, Node, RichText};
pub use error::{Error, Result};
pub use render::{RenderOptions, Rendered, render, render_rich_text};
