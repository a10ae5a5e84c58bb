//! Typed rich-text documents as delivered by the CMS.
//!
//! A rich-text field arrives as two parts: a tree of nodes (the `json` part of
//! the GraphQL response) and a flat list of the assets that the tree refers to
//! (the `links` side channel). This module models both with tagged unions so
//! that a node's kind decides which of its fields exist:
//!
//! - [`Node::Text`] carries literal text and its [`Mark`]s
//! - [`Node::Block`] carries a [`BlockKind`] (with any kind-specific data) and
//!   child nodes
//! - [`Asset`] describes one embedded media file
//!
//! # Example
//!
//! ```
//! use kirjo::document::{BlockKind, Node, RichText};
//!
//! let json = r#"{
//!     "json": {
//!         "nodeType": "document",
//!         "data": {},
//!         "content": [
//!             {
//!                 "nodeType": "paragraph",
//!                 "data": {},
//!                 "content": [
//!                     { "nodeType": "text", "value": "Hei!", "marks": [], "data": {} }
//!                 ]
//!             }
//!         ]
//!     },
//!     "links": { "assets": { "block": [] } }
//! }"#;
//!
//! let rich_text = RichText::from_json(json).unwrap();
//! match &rich_text.document.content[0] {
//!     Node::Block(block) => assert_eq!(block.kind, BlockKind::Paragraph),
//!     Node::Text(_) => unreachable!(),
//! }
//! ```

mod asset;
mod decode;
mod mark;
mod node;

pub use asset::{Asset, Links};
pub use decode::RichText;
pub use mark::Mark;
pub use node::{Block, BlockKind, CellSpan, Document, Link, LinkKind, Node, Text, node_type};
