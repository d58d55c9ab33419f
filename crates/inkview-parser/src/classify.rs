//! First-token content classification.

use log::trace;

use inkview_core::{
    content::{ContentType, is_content_whitespace, trim_content},
    keyword::is_diagram_keyword,
};

/// Suggests how `text` should be previewed.
///
/// The text is trimmed and lowercased, and its first whitespace-delimited
/// token is compared against the diagram [`KEYWORDS`]. Empty or blank text
/// is [`ContentType::Markdown`]. Whitespace follows
/// [`is_content_whitespace`], so a leading byte-order mark is skipped.
///
/// Only the first token is inspected, so prose that happens to open with a
/// keyword (`"Pie charts are great"`) is classified as
/// [`ContentType::Mermaid`].
///
/// [`KEYWORDS`]: inkview_core::keyword::KEYWORDS
///
/// # Examples
///
/// ```
/// # use inkview_core::content::ContentType;
/// # use inkview_parser::classify;
/// assert_eq!(classify("graph TD\n  A-->B"), ContentType::Mermaid);
/// assert_eq!(classify("# Title\nplain text"), ContentType::Markdown);
/// assert_eq!(classify(""), ContentType::Markdown);
/// ```
pub fn classify(text: &str) -> ContentType {
    let folded = trim_content(text).to_lowercase();
    let Some(first_token) = folded.split(is_content_whitespace).next() else {
        return ContentType::Markdown;
    };

    let kind = if !first_token.is_empty() && is_diagram_keyword(first_token) {
        ContentType::Mermaid
    } else {
        ContentType::Markdown
    };

    trace!(first_token, kind:?; "Classified content");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty_and_blank() {
        assert_eq!(classify(""), ContentType::Markdown);
        assert_eq!(classify("   \n\t  "), ContentType::Markdown);
    }

    #[test]
    fn test_classify_diagram_sources() {
        assert_eq!(classify("graph TD\n  A-->B"), ContentType::Mermaid);
        assert_eq!(classify("sequenceDiagram\nAlice->>Bob: Hi"), ContentType::Mermaid);
        assert_eq!(classify("  \n  flowchart LR"), ContentType::Mermaid);
        assert_eq!(classify("C4Context\ntitle System"), ContentType::Mermaid);
        assert_eq!(classify("GANTT"), ContentType::Mermaid);
    }

    #[test]
    fn test_classify_directive_opening() {
        assert_eq!(
            classify("%%{ init: {'theme': 'dark'} }%%\ngraph TD"),
            ContentType::Mermaid
        );
        // The directive glued to its body is a different first token
        assert_eq!(classify("%%{init: {}}%%\ngraph TD"), ContentType::Markdown);
    }

    #[test]
    fn test_classify_markdown() {
        assert_eq!(classify("# Title\nplain text"), ContentType::Markdown);
        assert_eq!(classify("graphs are fun"), ContentType::Markdown);
        assert_eq!(
            classify("```mermaid\ngraph TD\n```"),
            ContentType::Markdown
        );
    }

    #[test]
    fn test_classify_first_token_false_positive() {
        assert_eq!(classify("Pie charts are great"), ContentType::Mermaid);
        assert_eq!(classify("Journey to the west"), ContentType::Mermaid);
    }

    #[test]
    fn test_classify_token_split_on_any_whitespace() {
        assert_eq!(classify("pie\ttitle Pets"), ContentType::Mermaid);
        assert_eq!(classify("mindmap\r\n  root"), ContentType::Mermaid);
    }

    #[test]
    fn test_classify_skips_byte_order_mark() {
        assert_eq!(classify("\u{feff}graph TD\nA-->B"), ContentType::Mermaid);
        assert_eq!(classify("\u{feff}"), ContentType::Markdown);
        assert_eq!(classify("pie\u{feff}title Pets"), ContentType::Mermaid);
    }

    #[test]
    fn test_classify_next_line_is_part_of_token() {
        assert_eq!(classify("graph\u{85}TD"), ContentType::Markdown);
        assert_eq!(classify("\u{85}graph TD"), ContentType::Markdown);
    }

    #[test]
    fn test_classify_binary_looking_input() {
        assert_eq!(classify("\u{0}\u{1}\u{fffd}graph"), ContentType::Markdown);
    }
}
