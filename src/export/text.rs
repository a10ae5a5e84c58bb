//! Plain-text extraction from rendered fragments.

use crate::render::{Fragment, Tag};

/// Extract the visible text of `fragments`.
///
/// Line breaks become `\n`, and each block element starts on a new line.
/// Images contribute nothing.
pub fn to_text(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    collect(fragments, &mut out);
    out
}

fn collect(fragments: &[Fragment], out: &mut String) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Element(el) if el.tag == Tag::Break => out.push('\n'),
            Fragment::Element(el) => {
                if el.tag.is_block() && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                collect(&el.children, out);
            }
        }
    }
}
