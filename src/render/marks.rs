//! Mark → inline wrapper mapping.

use crate::document::Mark;

use super::element::{Element, Fragment, Tag};

/// Wrap already-rendered inline content in the element for `mark`.
///
/// Unknown marks get a plain `<span>`: the formatting is dropped, the content
/// is kept.
pub fn render_mark(mark: &Mark, content: Vec<Fragment>) -> Element {
    match mark {
        Mark::Bold => Element::with_children(Tag::Strong, content).with_class("font-bold"),
        Mark::Italic => Element::with_children(Tag::Emphasis, content),
        Mark::Underline => Element::with_children(Tag::Underline, content),
        Mark::Code => Element::with_children(Tag::Code, content),
        Mark::Superscript => Element::with_children(Tag::Superscript, content),
        Mark::Subscript => Element::with_children(Tag::Subscript, content),
        Mark::Other(_) => Element::with_children(Tag::Span, content),
    }
}

/// Apply marks in order; the first mark ends up innermost.
pub fn apply_marks(marks: &[Mark], content: Vec<Fragment>) -> Vec<Fragment> {
    marks.iter().fold(content, |inner, mark| {
        vec![Fragment::Element(render_mark(mark, inner))]
    })
}
