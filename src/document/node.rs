//! Document tree nodes and their kinds.

use super::mark::Mark;

/// Wire names of the node types the CMS emits in `nodeType`.
pub mod node_type {
    pub const DOCUMENT: &str = "document";
    pub const PARAGRAPH: &str = "paragraph";
    pub const HEADING_1: &str = "heading-1";
    pub const HEADING_2: &str = "heading-2";
    pub const HEADING_3: &str = "heading-3";
    pub const HEADING_4: &str = "heading-4";
    pub const HEADING_5: &str = "heading-5";
    pub const HEADING_6: &str = "heading-6";
    pub const UNORDERED_LIST: &str = "unordered-list";
    pub const ORDERED_LIST: &str = "ordered-list";
    pub const LIST_ITEM: &str = "list-item";
    pub const HR: &str = "hr";
    pub const QUOTE: &str = "blockquote";
    pub const TABLE: &str = "table";
    pub const TABLE_ROW: &str = "table-row";
    pub const TABLE_CELL: &str = "table-cell";
    pub const TABLE_HEADER_CELL: &str = "table-header-cell";
    pub const EMBEDDED_ASSET: &str = "embedded-asset-block";
    pub const EMBEDDED_ENTRY: &str = "embedded-entry-block";
    pub const EMBEDDED_ENTRY_INLINE: &str = "embedded-entry-inline";
    pub const EMBEDDED_RESOURCE: &str = "embedded-resource-block";
    pub const HYPERLINK: &str = "hyperlink";
    pub const ENTRY_HYPERLINK: &str = "entry-hyperlink";
    pub const ASSET_HYPERLINK: &str = "asset-hyperlink";
    pub const RESOURCE_HYPERLINK: &str = "resource-hyperlink";
    pub const TEXT: &str = "text";
}

/// The root of a rich-text document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Top-level nodes in document order.
    pub content: Vec<Node>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its top-level nodes.
    pub fn with_content(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Check if the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf text run.
    Text(Text),
    /// Structural node with child content.
    Block(Block),
}

impl Node {
    /// Create an unmarked text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text::new(value))
    }

    /// Create a text node carrying the given marks.
    pub fn marked(value: impl Into<String>, marks: Vec<Mark>) -> Self {
        Node::Text(Text {
            value: value.into(),
            marks,
        })
    }

    /// Create a structural node.
    pub fn block(kind: BlockKind, content: Vec<Node>) -> Self {
        Node::Block(Block { kind, content })
    }

    /// Child nodes (always empty for text).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Block(block) => &block.content,
        }
    }
}

/// A run of text with inline formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub value: String,
    /// Active marks in document order.
    pub marks: Vec<Mark>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    /// Add a mark (builder style).
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }
}

/// A structural node: its kind plus ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: Vec<Node>,
}

/// Kind of a structural node, with the data that kind defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A nested document root; its content is spliced into the parent.
    Document,
    Paragraph,
    /// Heading with level 1-6. Build it with [`BlockKind::heading`] to
    /// check the level; out-of-range levels render as `h6`.
    Heading(u8),
    UnorderedList,
    OrderedList,
    ListItem,
    /// Thematic break. Has no meaningful children.
    HorizontalRule,
    Blockquote,
    Table,
    TableRow,
    TableCell(CellSpan),
    TableHeaderCell(CellSpan),
    /// Reference to an embedded media asset by identifier.
    EmbeddedAsset { target: String },
    /// Any of the hyperlink variants.
    Hyperlink(Link),
    /// A node type without a renderer (embedded entries, resources, or
    /// anything the CMS adds later). Carries the wire name for diagnostics.
    Unsupported(String),
}

impl BlockKind {
    /// Heading kind for `level`, or `None` outside 1-6.
    pub fn heading(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(BlockKind::Heading(level))
    }

    /// The wire name of this kind.
    pub fn node_type(&self) -> &str {
        match self {
            BlockKind::Document => node_type::DOCUMENT,
            BlockKind::Paragraph => node_type::PARAGRAPH,
            BlockKind::Heading(1) => node_type::HEADING_1,
            BlockKind::Heading(2) => node_type::HEADING_2,
            BlockKind::Heading(3) => node_type::HEADING_3,
            BlockKind::Heading(4) => node_type::HEADING_4,
            BlockKind::Heading(5) => node_type::HEADING_5,
            BlockKind::Heading(_) => node_type::HEADING_6,
            BlockKind::UnorderedList => node_type::UNORDERED_LIST,
            BlockKind::OrderedList => node_type::ORDERED_LIST,
            BlockKind::ListItem => node_type::LIST_ITEM,
            BlockKind::HorizontalRule => node_type::HR,
            BlockKind::Blockquote => node_type::QUOTE,
            BlockKind::Table => node_type::TABLE,
            BlockKind::TableRow => node_type::TABLE_ROW,
            BlockKind::TableCell(_) => node_type::TABLE_CELL,
            BlockKind::TableHeaderCell(_) => node_type::TABLE_HEADER_CELL,
            BlockKind::EmbeddedAsset { .. } => node_type::EMBEDDED_ASSET,
            BlockKind::Hyperlink(link) => match link.kind {
                LinkKind::Uri => node_type::HYPERLINK,
                LinkKind::Entry => node_type::ENTRY_HYPERLINK,
                LinkKind::Asset => node_type::ASSET_HYPERLINK,
            },
            BlockKind::Unsupported(name) => name.as_str(),
        }
    }
}

/// Column and row span of a table cell. `None` means the attribute is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSpan {
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
}

impl CellSpan {
    pub fn new(colspan: u32, rowspan: u32) -> Self {
        Self {
            colspan: Some(colspan),
            rowspan: Some(rowspan),
        }
    }
}

/// Which hyperlink variant a link node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Plain URI link (`hyperlink`).
    Uri,
    /// Link to another content entry (`entry-hyperlink`).
    Entry,
    /// Link to an asset (`asset-hyperlink`).
    Asset,
}

/// Hyperlink data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: LinkKind,
    /// `data.uri`, when the node carries one.
    pub uri: Option<String>,
    /// `data.target.sys.id` for entry and asset links.
    pub target: Option<String>,
}

impl Link {
    /// Plain URI link.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Uri,
            uri: Some(uri.into()),
            target: None,
        }
    }

    /// Link to a content entry by identifier.
    pub fn entry(target: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Entry,
            uri: None,
            target: Some(target.into()),
        }
    }

    /// Link to an asset by identifier.
    pub fn asset(target: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Asset,
            uri: None,
            target: Some(target.into()),
        }
    }

    /// Set the URI (builder style).
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}
