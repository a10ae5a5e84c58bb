//! XHTML serialization of rendered fragments.
//!
//! Output is compact (no indentation) since it is embedded into page
//! layouts as-is. Void elements self-close so the result is well-formed XML.

use quick_xml::escape::escape;

use crate::render::{Element, Fragment};

/// Serialize fragments to XHTML markup.
pub fn to_xhtml(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    write_fragments(&mut out, fragments);
    out
}

/// Wrap rendered fragments in a complete XHTML document.
///
/// # Arguments
///
/// * `fragments` - The rendered body content
/// * `title` - Document title
/// * `stylesheet_href` - Optional href to an external stylesheet
pub fn to_xhtml_document(
    fragments: &[Fragment],
    title: &str,
    stylesheet_href: Option<&str>,
) -> String {
    let mut doc = String::new();

    doc.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
  <meta charset="utf-8"/>
  <title>"#,
    );
    doc.push_str(&escape(title));
    doc.push_str("</title>\n");

    if let Some(href) = stylesheet_href {
        doc.push_str("  <link rel=\"stylesheet\" type=\"text/css\" href=\"");
        doc.push_str(&escape(href));
        doc.push_str("\"/>\n");
    }

    doc.push_str("</head>\n<body>\n");
    write_fragments(&mut doc, fragments);
    doc.push_str("\n</body>\n</html>\n");
    doc
}

fn write_fragments(out: &mut String, fragments: &[Fragment]) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(&escape(text.as_str())),
            Fragment::Element(element) => write_element(out, element),
        }
    }
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag.name();

    out.push('<');
    out.push_str(tag);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(attr.name);
        out.push_str("=\"");
        out.push_str(&escape(attr.value.as_str()));
        out.push('"');
    }

    if element.tag.is_void() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    write_fragments(out, &element.children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
