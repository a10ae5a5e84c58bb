//! Text run segmentation.

use memchr::memchr_iter;

use super::element::Fragment;

/// Split `text` on `\n`, putting a line-break marker between segments.
///
/// Empty segments are not emitted; the breaks always are, so `"a\n\nb"`
/// yields `a, br, br, b`.
pub fn segment_text(text: &str) -> Vec<Fragment> {
    let mut out = Vec::new();
    let mut start = 0;

    // '\n' is ASCII, so every match is a char boundary.
    for pos in memchr_iter(b'\n', text.as_bytes()) {
        push_segment(&mut out, &text[start..pos]);
        out.push(Fragment::line_break());
        start = pos + 1;
    }
    push_segment(&mut out, &text[start..]);

    out
}

fn push_segment(out: &mut Vec<Fragment>, segment: &str) {
    if !segment.is_empty() {
        out.push(Fragment::text(segment));
    }
}
