//! Node kind → presentation element mapping.

use crate::document::{BlockKind, CellSpan, Link, LinkKind};

use super::assets::AssetIndex;
use super::element::{Element, Fragment, Tag};

/// What the node renderer produced for one structural node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOutput {
    /// A single element wrapping the children.
    Element(Element),
    /// Children without a wrapper (nested documents, links with no href).
    Splice(Vec<Fragment>),
    /// Nothing at all.
    Omit,
}

impl NodeOutput {
    pub fn append_to(self, out: &mut Vec<Fragment>) {
        match self {
            NodeOutput::Element(el) => out.push(Fragment::Element(el)),
            NodeOutput::Splice(children) => out.extend(children),
            NodeOutput::Omit => {}
        }
    }
}

/// Render one structural node from its kind and already-rendered children.
pub fn render_block(
    kind: &BlockKind,
    children: Vec<Fragment>,
    assets: &AssetIndex<'_>,
    base_url: Option<&str>,
) -> NodeOutput {
    let element = match kind {
        BlockKind::Document => return NodeOutput::Splice(children),
        BlockKind::Paragraph => Element::with_children(Tag::Paragraph, children),
        BlockKind::Heading(level) => Element::with_children(Tag::Heading(*level), children),
        BlockKind::UnorderedList => {
            Element::with_children(Tag::UnorderedList, children).with_class("list-disc")
        }
        BlockKind::OrderedList => {
            Element::with_children(Tag::OrderedList, children).with_class("list-decimal")
        }
        BlockKind::ListItem => Element::with_children(Tag::ListItem, children),
        BlockKind::HorizontalRule => Element::new(Tag::Rule),
        BlockKind::Blockquote => Element::with_children(Tag::BlockQuote, children),
        BlockKind::Table => Element::with_children(Tag::Table, children),
        BlockKind::TableRow => Element::with_children(Tag::TableRow, children),
        BlockKind::TableCell(span) => table_cell(Tag::TableCell, *span, children),
        BlockKind::TableHeaderCell(span) => table_cell(Tag::TableHeaderCell, *span, children),
        BlockKind::EmbeddedAsset { target } => match embedded_asset(target, assets) {
            Some(image) => image,
            None => return NodeOutput::Omit,
        },
        BlockKind::Hyperlink(link) => match link_href(link, assets) {
            Some(href) => anchor(href, base_url, children),
            None => return NodeOutput::Splice(children),
        },
        BlockKind::Unsupported(_) => return NodeOutput::Omit,
    };

    NodeOutput::Element(element)
}

/// Whether `href` points inside the site at `base_url`.
///
/// An unknown or empty base URL makes every link external.
pub fn is_internal_link(href: &str, base_url: Option<&str>) -> bool {
    base_url.is_some_and(|base| !base.is_empty() && href.starts_with(base))
}

fn table_cell(tag: Tag, span: CellSpan, children: Vec<Fragment>) -> Element {
    let mut cell = Element::with_children(tag, children);
    if let Some(colspan) = span.colspan {
        cell = cell.with_attr("colspan", colspan.to_string());
    }
    if let Some(rowspan) = span.rowspan {
        cell = cell.with_attr("rowspan", rowspan.to_string());
    }
    cell
}

fn embedded_asset(target: &str, assets: &AssetIndex<'_>) -> Option<Element> {
    let asset = assets.get(target)?;

    let mut image = Element::new(Tag::Image)
        .with_attr("src", asset.url.as_str())
        .with_attr("alt", asset.alt_text());
    if let Some(width) = asset.width {
        image = image.with_attr("width", width.to_string());
    }
    if let Some(height) = asset.height {
        image = image.with_attr("height", height.to_string());
    }
    Some(image)
}

/// The href for a link: its URI, or for asset links without one, the
/// linked asset's URL.
fn link_href<'a>(link: &'a Link, assets: &AssetIndex<'a>) -> Option<&'a str> {
    if let Some(uri) = link.uri.as_deref() {
        return Some(uri);
    }
    match link.kind {
        LinkKind::Asset => link
            .target
            .as_deref()
            .and_then(|id| assets.get(id))
            .map(|asset| asset.url.as_str()),
        LinkKind::Uri | LinkKind::Entry => None,
    }
}

fn anchor(href: &str, base_url: Option<&str>, children: Vec<Fragment>) -> Element {
    let anchor = Element::with_children(Tag::Link, children).with_attr("href", href);
    if is_internal_link(href, base_url) {
        anchor
    } else {
        anchor
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
    }
}
