//! Tokens that open Mermaid diagram source.
//!
//! A text whose first token matches one of [`KEYWORDS`] (ignoring case) is
//! treated as a diagram rather than formatted text.

/// Diagram-opening tokens, in the order Mermaid documents its diagram kinds.
///
/// The final entry is the directive marker, so a diagram that starts with
/// its own `%%{init: ...}%%` block is still recognized.
pub const KEYWORDS: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "erDiagram",
    "journey",
    "gantt",
    "pie",
    "mindmap",
    "timeline",
    "gitGraph",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
    "requirementDiagram",
    "%%{",
];

/// Returns `true` if `token` is exactly one of [`KEYWORDS`], ignoring case.
///
/// # Examples
///
/// ```
/// use inkview_core::keyword::is_diagram_keyword;
///
/// assert!(is_diagram_keyword("sequencediagram"));
/// assert!(is_diagram_keyword("%%{"));
/// assert!(!is_diagram_keyword("graphs"));
/// ```
pub fn is_diagram_keyword(token: &str) -> bool {
    KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_matches_itself() {
        for keyword in KEYWORDS {
            assert!(is_diagram_keyword(keyword), "{keyword} should match");
            assert!(is_diagram_keyword(&keyword.to_lowercase()));
            assert!(is_diagram_keyword(&keyword.to_uppercase()));
        }
    }

    #[test]
    fn test_prefix_and_suffix_do_not_match() {
        assert!(!is_diagram_keyword("gra"));
        assert!(!is_diagram_keyword("graphTD"));
        assert!(!is_diagram_keyword("%%"));
        assert!(!is_diagram_keyword(""));
    }

    #[test]
    fn test_state_diagram_v2_is_not_a_keyword() {
        // Only the whole first token is compared.
        assert!(!is_diagram_keyword("stateDiagram-v2"));
    }
}
