//! Presentation elements produced by the renderer.

/// Element tag of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paragraph,
    /// Headings with level 1-6.
    Heading(u8),
    UnorderedList,
    OrderedList,
    ListItem,
    Rule,
    BlockQuote,
    Table,
    TableRow,
    TableCell,
    TableHeaderCell,
    Image,
    Link,
    /// Explicit line break inside a text run.
    Break,
    Strong,
    Emphasis,
    Underline,
    Code,
    Superscript,
    Subscript,
    Span,
}

impl Tag {
    /// HTML tag name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Paragraph => "p",
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(_) => "h6", // Fallback
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::Rule => "hr",
            Tag::BlockQuote => "blockquote",
            Tag::Table => "table",
            Tag::TableRow => "tr",
            Tag::TableCell => "td",
            Tag::TableHeaderCell => "th",
            Tag::Image => "img",
            Tag::Link => "a",
            Tag::Break => "br",
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::Underline => "u",
            Tag::Code => "code",
            Tag::Superscript => "sup",
            Tag::Subscript => "sub",
            Tag::Span => "span",
        }
    }

    /// Void elements never have children and self-close.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Rule | Tag::Image | Tag::Break)
    }

    /// Block-level elements start on their own line in text output.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Tag::Paragraph
                | Tag::Heading(_)
                | Tag::UnorderedList
                | Tag::OrderedList
                | Tag::ListItem
                | Tag::Rule
                | Tag::BlockQuote
                | Tag::Table
                | Tag::TableRow
                | Tag::TableCell
                | Tag::TableHeaderCell
        )
    }
}

/// A name/value attribute pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

/// A rendered element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    /// Attributes in emission order.
    pub attributes: Vec<Attribute>,
    pub children: Vec<Fragment>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element wrapping already-rendered children.
    pub fn with_children(tag: Tag, children: Vec<Fragment>) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children,
        }
    }

    /// Append an attribute (builder style).
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name,
            value: value.into(),
        });
        self
    }

    /// Set the `class` attribute (builder style).
    pub fn with_class(self, class: &'static str) -> Self {
        self.with_attr("class", class)
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// A piece of rendered output: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Element(Element),
    Text(String),
}

impl Fragment {
    pub fn text(value: impl Into<String>) -> Self {
        Fragment::Text(value.into())
    }

    /// The explicit line-break marker.
    pub fn line_break() -> Self {
        Fragment::Element(Element::new(Tag::Break))
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Fragment::Element(el) if el.tag == Tag::Break)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Element(el) => Some(el),
            Fragment::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Element(_) => None,
        }
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(Tag::Image.is_void());
        assert!(Tag::Break.is_void());
        assert!(Tag::Rule.is_void());
        assert!(!Tag::Paragraph.is_void());
        assert!(!Tag::Link.is_void());
    }

    #[test]
    fn test_heading_names() {
        let names: Vec<_> = (1u8..=6).map(|n| Tag::Heading(n).name()).collect();
        assert_eq!(names, vec!["h1", "h2", "h3", "h4", "h5", "h6"]);
    }

    #[test]
    fn test_attribute_lookup() {
        let el = Element::new(Tag::Link)
            .with_attr("href", "https://example.com")
            .with_class("plain");
        assert_eq!(el.attr("href"), Some("https://example.com"));
        assert_eq!(el.attr("class"), Some("plain"));
        assert_eq!(el.attr("target"), None);
    }

    #[test]
    fn test_line_break_marker() {
        assert!(Fragment::line_break().is_line_break());
        assert!(!Fragment::text("\n").is_line_break());
        assert!(!Fragment::from(Element::new(Tag::Span)).is_line_break());
    }
}
