//! Decoding of the CMS wire format.
//!
//! Node trees are walked from a `serde_json::Value` rather than derived, so a
//! single odd node (missing `nodeType`, a non-object entry in `content`) is
//! dropped on its own instead of failing the whole page. Asset entries use
//! serde derive, one entry at a time, so a partial asset is dropped alone.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::util::decode_text;

use super::asset::{Asset, Links};
use super::mark::Mark;
use super::node::{Block, BlockKind, CellSpan, Document, Link, LinkKind, Node, Text, node_type};

/// A rich-text field: document plus the assets it links to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    pub document: Document,
    pub links: Links,
}

impl RichText {
    pub fn new(document: Document, links: Links) -> Self {
        Self { document, links }
    }

    /// Parse a rich-text field from JSON.
    ///
    /// Accepts either the GraphQL field shape
    /// (`{ "json": <document>, "links": { "assets": { "block": [...] } } }`)
    /// or a bare document node, which yields empty links.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a rich-text field from raw bytes (UTF-8, BOM tolerated).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_json(&decode_text(bytes))
    }

    /// Read and parse a rich-text field from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading rich text");
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Build from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("json").is_some() {
            let field: WireField = serde_json::from_value(value)?;
            let document = Document::from_value(&field.json)?;
            let links = field.links.map(WireLinks::into_links).unwrap_or_default();
            return Ok(Self { document, links });
        }

        if value.get("nodeType").is_some() {
            return Ok(Self {
                document: Document::from_value(&value)?,
                links: Links::default(),
            });
        }

        Err(Error::InvalidDocument(
            "expected a rich-text field or a document node".to_string(),
        ))
    }
}

impl Document {
    /// Parse a bare document node from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a document from a parsed root node.
    ///
    /// A root whose `nodeType` is not `document` is kept as the single child
    /// of an implicit document, so the caller still gets a partial render.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(root) = value.as_object() else {
            return Err(Error::InvalidDocument(
                "document root is not a JSON object".to_string(),
            ));
        };
        let Some(name) = root.get("nodeType").and_then(Value::as_str) else {
            return Err(Error::InvalidDocument(
                "document root has no nodeType".to_string(),
            ));
        };

        if name == node_type::DOCUMENT {
            return Ok(Document::with_content(decode_content(root)));
        }

        warn!(node_type = name, "document root is not a document node");
        Ok(Document::with_content(decode_node(value).into_iter().collect()))
    }
}

#[derive(Deserialize)]
struct WireField {
    json: Value,
    #[serde(default)]
    links: Option<WireLinks>,
}

#[derive(Deserialize)]
struct WireLinks {
    #[serde(default)]
    assets: Option<WireAssets>,
}

/// Unpublished or deleted assets come back as `null` entries.
#[derive(Deserialize)]
struct WireAssets {
    #[serde(default)]
    block: Option<Vec<Value>>,
    #[serde(default)]
    hyperlink: Option<Vec<Value>>,
}

impl WireLinks {
    fn into_links(self) -> Links {
        let Some(assets) = self.assets else {
            return Links::default();
        };
        Links {
            block_assets: decode_assets(assets.block.unwrap_or_default()),
            hyperlink_assets: decode_assets(assets.hyperlink.unwrap_or_default()),
        }
    }
}

/// Decode asset entries, skipping nulls and entries without an id or URL.
fn decode_assets(entries: Vec<Value>) -> Vec<Asset> {
    entries
        .into_iter()
        .filter(|entry| !entry.is_null())
        .filter_map(|entry| match serde_json::from_value::<Asset>(entry) {
            Ok(asset) if asset.url.is_empty() => {
                debug!(id = %asset.id, "skipping asset without url");
                None
            }
            Ok(asset) => Some(asset),
            Err(e) => {
                debug!(error = %e, "skipping malformed asset");
                None
            }
        })
        .collect()
}

fn decode_content(node: &Map<String, Value>) -> Vec<Node> {
    node.get("content")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(decode_node).collect())
        .unwrap_or_default()
}

fn decode_node(value: &Value) -> Option<Node> {
    let node = value.as_object()?;
    let Some(name) = node.get("nodeType").and_then(Value::as_str) else {
        debug!("skipping content entry without nodeType");
        return None;
    };

    if name == node_type::TEXT {
        return Some(Node::Text(decode_text_run(node)));
    }

    let kind = decode_kind(name, node.get("data"));
    Some(Node::Block(Block {
        kind,
        content: decode_content(node),
    }))
}

fn decode_text_run(node: &Map<String, Value>) -> Text {
    let value = node
        .get("value")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let marks = node
        .get("marks")
        .and_then(Value::as_array)
        .map(|marks| {
            marks
                .iter()
                .filter_map(|mark| mark.get("type").and_then(Value::as_str))
                .map(Mark::parse)
                .collect()
        })
        .unwrap_or_default();
    Text { value, marks }
}

fn decode_kind(name: &str, data: Option<&Value>) -> BlockKind {
    match name {
        node_type::DOCUMENT => BlockKind::Document,
        node_type::PARAGRAPH => BlockKind::Paragraph,
        node_type::HEADING_1 => BlockKind::Heading(1),
        node_type::HEADING_2 => BlockKind::Heading(2),
        node_type::HEADING_3 => BlockKind::Heading(3),
        node_type::HEADING_4 => BlockKind::Heading(4),
        node_type::HEADING_5 => BlockKind::Heading(5),
        node_type::HEADING_6 => BlockKind::Heading(6),
        node_type::UNORDERED_LIST => BlockKind::UnorderedList,
        node_type::ORDERED_LIST => BlockKind::OrderedList,
        node_type::LIST_ITEM => BlockKind::ListItem,
        node_type::HR => BlockKind::HorizontalRule,
        node_type::QUOTE => BlockKind::Blockquote,
        node_type::TABLE => BlockKind::Table,
        node_type::TABLE_ROW => BlockKind::TableRow,
        node_type::TABLE_CELL => BlockKind::TableCell(cell_span(data)),
        node_type::TABLE_HEADER_CELL => BlockKind::TableHeaderCell(cell_span(data)),
        node_type::EMBEDDED_ASSET => match target_id(data) {
            Some(target) => BlockKind::EmbeddedAsset { target },
            None => {
                debug!("embedded asset without a target");
                BlockKind::Unsupported(name.to_string())
            }
        },
        node_type::HYPERLINK => BlockKind::Hyperlink(link(LinkKind::Uri, data)),
        node_type::ENTRY_HYPERLINK => BlockKind::Hyperlink(link(LinkKind::Entry, data)),
        node_type::ASSET_HYPERLINK => BlockKind::Hyperlink(link(LinkKind::Asset, data)),
        other => BlockKind::Unsupported(other.to_string()),
    }
}

fn link(kind: LinkKind, data: Option<&Value>) -> Link {
    Link {
        kind,
        uri: data
            .and_then(|d| d.get("uri"))
            .and_then(Value::as_str)
            .map(str::to_string),
        target: match kind {
            LinkKind::Uri => None,
            LinkKind::Entry | LinkKind::Asset => target_id(data),
        },
    }
}

fn target_id(data: Option<&Value>) -> Option<String> {
    data?
        .pointer("/target/sys/id")?
        .as_str()
        .map(str::to_string)
}

fn cell_span(data: Option<&Value>) -> CellSpan {
    CellSpan {
        colspan: span_attr(data, "colspan", "colSpan"),
        rowspan: span_attr(data, "rowspan", "rowSpan"),
    }
}

fn span_attr(data: Option<&Value>, name: &str, alias: &str) -> Option<u32> {
    let data = data?;
    data.get(name)
        .or_else(|| data.get(alias))?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
}
