//! Serialization of rendered rich text.
//!
//! - [`to_xhtml`]: compact XHTML for embedding into a page layout
//! - [`to_xhtml_document`]: a standalone XHTML page around the body
//! - [`to_text`]: plain text for excerpts and meta descriptions
//!
//! # Example
//!
//! ```
//! use kirjo::document::RichText;
//! use kirjo::export::{to_text, to_xhtml};
//! use kirjo::render::{RenderOptions, render_rich_text};
//!
//! let rich_text = RichText::from_json(r#"{
//!     "nodeType": "document",
//!     "content": [
//!         { "nodeType": "heading-2", "content": [{ "nodeType": "text", "value": "Pennut", "marks": [] }] }
//!     ]
//! }"#)?;
//! let rendered = render_rich_text(&rich_text, &RenderOptions::default());
//!
//! assert_eq!(to_xhtml(&rendered.fragments), "<h2>Pennut</h2>");
//! assert_eq!(to_text(&rendered.fragments), "Pennut");
//! # Ok::<(), kirjo::Error>(())
//! ```

mod text;
mod xhtml;

pub use text::to_text;
pub use xhtml::{to_xhtml, to_xhtml_document};
