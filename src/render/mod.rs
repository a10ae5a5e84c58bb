//! Rich-text document → presentation tree rendering.
//!
//! The renderer walks a [`Document`] depth-first. Text leaves are split on
//! newlines ([`segment_text`]) and wrapped in their marks ([`render_mark`]);
//! structural nodes render their children first and then hand them to the
//! node renderer ([`render_block`]). Embedded assets resolve through an
//! [`AssetIndex`] built once per call.
//!
//! Rendering never fails. Node kinds without a renderer and assets that do
//! not resolve are left out of the output; unknown marks keep their content
//! in a plain span.
//!
//! # Example
//!
//! ```
//! use kirjo::document::{BlockKind, Document, Mark, Node};
//! use kirjo::render::{RenderOptions, render};
//!
//! let document = Document::with_content(vec![Node::block(
//!     BlockKind::Paragraph,
//!     vec![Node::marked("Hello\nWorld", vec![Mark::Bold])],
//! )]);
//!
//! let rendered = render(&document, &[], &RenderOptions::default());
//! assert_eq!(
//!     rendered.to_xhtml(),
//!     r#"<p><strong class="font-bold">Hello<br/>World</strong></p>"#
//! );
//! ```

mod assets;
mod element;
mod marks;
mod nodes;
mod text;

pub use assets::AssetIndex;
pub use element::{Attribute, Element, Fragment, Tag};
pub use marks::{apply_marks, render_mark};
pub use nodes::{NodeOutput, is_internal_link, render_block};
pub use text::segment_text;

use tracing::{debug, warn};

use crate::document::{Asset, BlockKind, Document, Node, RichText, Text};
use crate::export::{to_text, to_xhtml};

/// Configuration for a render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Site base URL. Links starting with it open in the same browsing
    /// context; all others open in a new one with `rel="noopener noreferrer"`.
    pub base_url: Option<String>,
    /// Maximum nesting depth (top-level nodes are depth 1). Deeper nodes are
    /// pruned. `None` renders any depth.
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// The rendered presentation tree of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Top-level fragments in document order.
    pub fragments: Vec<Fragment>,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// Serialize to XHTML markup.
    pub fn to_xhtml(&self) -> String {
        to_xhtml(&self.fragments)
    }

    /// Extract plain text.
    pub fn to_text(&self) -> String {
        to_text(&self.fragments)
    }
}

/// Render `document` with the assets it links to.
pub fn render<'a, I>(document: &Document, assets: I, options: &RenderOptions) -> Rendered
where
    I: IntoIterator<Item = &'a Asset>,
{
    let mut renderer = Renderer {
        assets: AssetIndex::new(assets),
        options,
        pruned: 0,
    };

    let mut fragments = Vec::new();
    for node in &document.content {
        renderer.walk(node, 1, &mut fragments);
    }

    if renderer.pruned > 0 {
        warn!(
            pruned = renderer.pruned,
            max_depth = options.max_depth,
            "document nesting exceeds the depth cap, deeper nodes were dropped"
        );
    }
    debug!(
        nodes = document.content.len(),
        assets = renderer.assets.len(),
        fragments = fragments.len(),
        "rendered rich text"
    );

    Rendered { fragments }
}

/// Render a decoded rich-text field (document plus its links).
pub fn render_rich_text(rich_text: &RichText, options: &RenderOptions) -> Rendered {
    render(&rich_text.document, rich_text.links.assets(), options)
}

/// Per-call render state.
struct Renderer<'a> {
    assets: AssetIndex<'a>,
    options: &'a RenderOptions,
    pruned: usize,
}

impl Renderer<'_> {
    fn walk(&mut self, node: &Node, depth: usize, out: &mut Vec<Fragment>) {
        if let Some(max_depth) = self.options.max_depth
            && depth > max_depth
        {
            self.pruned += 1;
            return;
        }

        match node {
            Node::Text(text) => out.extend(render_text(text)),
            Node::Block(block) => {
                let mut children = Vec::new();
                if renders_children(&block.kind) {
                    for child in &block.content {
                        self.walk(child, depth + 1, &mut children);
                    }
                }
                render_block(
                    &block.kind,
                    children,
                    &self.assets,
                    self.options.base_url.as_deref(),
                )
                .append_to(out);
            }
        }
    }
}

fn render_text(text: &Text) -> Vec<Fragment> {
    apply_marks(&text.marks, segment_text(&text.value))
}

/// Kinds whose output never includes their children.
fn renders_children(kind: &BlockKind) -> bool {
    !matches!(
        kind,
        BlockKind::HorizontalRule | BlockKind::EmbeddedAsset { .. } | BlockKind::Unsupported(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CellSpan, Link, Links, Mark};

    fn para(content: Vec<Node>) -> Node {
        Node::block(BlockKind::Paragraph, content)
    }

    fn element(fragment: &Fragment) -> &Element {
        fragment.as_element().expect("expected an element")
    }

    #[test]
    fn test_hello_world_bold_paragraph() {
        let document = Document::with_content(vec![para(vec![Node::marked(
            "Hello\nWorld",
            vec![Mark::Bold],
        )])]);

        let rendered = render(&document, &[], &RenderOptions::default());

        assert_eq!(rendered.fragments.len(), 1);
        let p = element(&rendered.fragments[0]);
        assert_eq!(p.tag, Tag::Paragraph);
        assert_eq!(p.children.len(), 1);

        let strong = element(&p.children[0]);
        assert_eq!(strong.tag, Tag::Strong);
        assert_eq!(
            strong.children,
            vec![
                Fragment::text("Hello"),
                Fragment::line_break(),
                Fragment::text("World")
            ]
        );
    }

    #[test]
    fn test_unmarked_text_is_bare() {
        let document = Document::with_content(vec![para(vec![Node::text("a\nb")])]);
        let rendered = render(&document, &[], &RenderOptions::default());

        let p = element(&rendered.fragments[0]);
        assert_eq!(
            p.children,
            vec![
                Fragment::text("a"),
                Fragment::line_break(),
                Fragment::text("b")
            ]
        );
    }

    #[test]
    fn test_nested_lists() {
        let item = |text: &str| {
            Node::block(BlockKind::ListItem, vec![para(vec![Node::text(text)])])
        };
        let document = Document::with_content(vec![Node::block(
            BlockKind::UnorderedList,
            vec![
                item("Uros"),
                Node::block(
                    BlockKind::ListItem,
                    vec![Node::block(BlockKind::OrderedList, vec![item("Narttu")])],
                ),
            ],
        )]);

        let rendered = render(&document, &[], &RenderOptions::default());
        assert_eq!(
            rendered.to_xhtml(),
            "<ul class=\"list-disc\"><li><p>Uros</p></li>\
             <li><ol class=\"list-decimal\"><li><p>Narttu</p></li></ol></li></ul>"
        );
    }

    #[test]
    fn test_unsupported_nodes_are_pruned() {
        let document = Document::with_content(vec![
            Node::block(
                BlockKind::Unsupported("embedded-entry-block".to_string()),
                vec![para(vec![Node::text("hidden")])],
            ),
            para(vec![Node::text("shown")]),
        ]);

        let rendered = render(&document, &[], &RenderOptions::default());
        assert_eq!(rendered.fragments.len(), 1);
        assert_eq!(rendered.to_xhtml(), "<p>shown</p>");
    }

    #[test]
    fn test_unresolved_asset_is_pruned() {
        let assets = vec![Asset::new("known", "https://images.test/known.jpg")];
        let document = Document::with_content(vec![
            Node::block(
                BlockKind::EmbeddedAsset {
                    target: "missing".to_string(),
                },
                vec![],
            ),
            Node::block(
                BlockKind::EmbeddedAsset {
                    target: "known".to_string(),
                },
                vec![],
            ),
        ]);

        let rendered = render(&document, &assets, &RenderOptions::default());
        assert_eq!(rendered.fragments.len(), 1);
        assert_eq!(element(&rendered.fragments[0]).tag, Tag::Image);
    }

    #[test]
    fn test_nested_document_is_spliced() {
        let document = Document::with_content(vec![Node::block(
            BlockKind::Document,
            vec![para(vec![Node::text("a")]), para(vec![Node::text("b")])],
        )]);

        let rendered = render(&document, &[], &RenderOptions::default());
        assert_eq!(rendered.to_xhtml(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_table_rendering() {
        let cell = |span: CellSpan, text: &str| {
            Node::block(BlockKind::TableCell(span), vec![para(vec![Node::text(text)])])
        };
        let document = Document::with_content(vec![Node::block(
            BlockKind::Table,
            vec![Node::block(
                BlockKind::TableRow,
                vec![cell(CellSpan::new(2, 1), "Isä"), cell(CellSpan::default(), "Emä")],
            )],
        )]);

        let rendered = render(&document, &[], &RenderOptions::default());
        assert_eq!(
            rendered.to_xhtml(),
            "<table><tr><td colspan=\"2\" rowspan=\"1\"><p>Isä</p></td><td><p>Emä</p></td></tr></table>"
        );
    }

    #[test]
    fn test_links_use_base_url_from_options() {
        let document = Document::with_content(vec![para(vec![
            Node::block(
                BlockKind::Hyperlink(Link::uri("https://example.com/blogi/x")),
                vec![Node::text("sisäinen")],
            ),
            Node::block(
                BlockKind::Hyperlink(Link::uri("https://other.test/y")),
                vec![Node::text("ulkoinen")],
            ),
        ])]);
        let options = RenderOptions::new().with_base_url("https://example.com");

        let rendered = render(&document, &[], &options);
        let p = element(&rendered.fragments[0]);
        let internal = element(&p.children[0]);
        let external = element(&p.children[1]);

        assert_eq!(internal.attr("target"), None);
        assert_eq!(internal.attr("rel"), None);
        assert_eq!(external.attr("target"), Some("_blank"));
        assert_eq!(external.attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let assets = vec![Asset::new("img", "https://images.test/img.jpg").with_title("Kuva")];
        let document = Document::with_content(vec![
            para(vec![Node::marked("x\ny", vec![Mark::Italic, Mark::Code])]),
            Node::block(
                BlockKind::EmbeddedAsset {
                    target: "img".to_string(),
                },
                vec![],
            ),
        ]);
        let options = RenderOptions::new().with_base_url("https://example.com");

        let first = render(&document, &assets, &options);
        let second = render(&document, &assets, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_cap_prunes_deeper_nodes() {
        let document = Document::with_content(vec![Node::block(
            BlockKind::Blockquote,
            vec![para(vec![Node::text("deep")])],
        )]);

        let capped = render(&document, &[], &RenderOptions::new().with_max_depth(2));
        assert_eq!(capped.to_xhtml(), "<blockquote><p></p></blockquote>");

        let uncapped = render(&document, &[], &RenderOptions::default());
        assert_eq!(uncapped.to_xhtml(), "<blockquote><p>deep</p></blockquote>");
    }

    #[test]
    fn test_render_rich_text_uses_all_links() {
        let rich_text = RichText::new(
            Document::with_content(vec![para(vec![Node::block(
                BlockKind::Hyperlink(Link::asset("pdf")),
                vec![Node::text("Hinnasto")],
            )])]),
            Links {
                block_assets: vec![],
                hyperlink_assets: vec![Asset::new("pdf", "https://assets.test/hinnasto.pdf")],
            },
        );

        let rendered = render_rich_text(&rich_text, &RenderOptions::default());
        assert_eq!(
            rendered.to_xhtml(),
            "<p><a href=\"https://assets.test/hinnasto.pdf\" target=\"_blank\" \
             rel=\"noopener noreferrer\">Hinnasto</a></p>"
        );
    }

    #[test]
    fn test_empty_document() {
        let rendered = render(&Document::new(), &[], &RenderOptions::default());
        assert!(rendered.is_empty());
        assert_eq!(rendered.to_xhtml(), "");
    }
}
