//! The kinds of content Inkview knows how to preview.

use std::{fmt, str::FromStr};

/// How a piece of text is interpreted when rendering a preview.
///
/// [`ContentType::Mermaid`] treats the whole text as one diagram, while
/// [`ContentType::Markdown`] passes the text through and only replaces the
/// fenced `mermaid` blocks it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// General formatted text, possibly embedding diagram blocks.
    #[default]
    Markdown,
    /// Structured diagram source.
    Mermaid,
}

impl ContentType {
    /// All content types, in the order they are offered to users.
    pub const ALL: [ContentType; 2] = [ContentType::Markdown, ContentType::Mermaid];

    /// Returns the lowercase identifier of this content type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Mermaid => "mermaid",
        }
    }

    /// Returns the human-readable label of this content type.
    pub fn label(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::Mermaid => "Mermaid",
        }
    }

    /// Returns example text suggesting what content of this type looks like.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Markdown => "# Hello\nEnter Markdown...",
            Self::Mermaid => "graph TD\n    A --> B",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown content type `{s}`, expected `markdown` or `mermaid`"))
    }
}

/// Returns `true` for characters that separate or pad content.
///
/// This is Unicode whitespace plus the byte-order mark `U+FEFF`, minus the
/// next-line control `U+0085`. Editors on Windows often save files with a
/// leading byte-order mark, which must not hide a diagram keyword.
pub fn is_content_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trims [content whitespace](is_content_whitespace) from both ends of `text`.
pub fn trim_content(text: &str) -> &str {
    text.trim_matches(is_content_whitespace)
}
