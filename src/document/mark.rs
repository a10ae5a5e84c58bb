//! Inline formatting marks.

/// An inline formatting annotation on a text node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    Superscript,
    Subscript,
    /// A mark type with no dedicated rendering. Content is kept, the
    /// formatting is not.
    Other(String),
}

impl Mark {
    /// Parse a wire mark type (`"bold"`, `"italic"`, ...).
    pub fn parse(name: &str) -> Self {
        match name {
            "bold" => Mark::Bold,
            "italic" => Mark::Italic,
            "underline" => Mark::Underline,
            "code" => Mark::Code,
            "superscript" => Mark::Superscript,
            "subscript" => Mark::Subscript,
            other => Mark::Other(other.to_string()),
        }
    }

    /// The wire name of this mark.
    pub fn as_str(&self) -> &str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Code => "code",
            Mark::Superscript => "superscript",
            Mark::Subscript => "subscript",
            Mark::Other(name) => name,
        }
    }
}
