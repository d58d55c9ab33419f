//! Fenced `mermaid` block scanning.
//!
//! A block opens with the literal ```` ```mermaid ````, optionally followed by
//! whitespace, then a newline. It closes at the first ```` ``` ```` after
//! that. Blocks never overlap and an opening fence with no closing fence is
//! not a block.
//!
//! Whitespace after the opening fence and around the interior follows
//! [`is_content_whitespace`](inkview_core::content::is_content_whitespace).

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use inkview_core::content::trim_content;

use crate::Span;

/// Static regex for fenced mermaid blocks
/// The whitespace class adds U+FEFF and removes U+0085
/// Group 1: the block interior, untrimmed
static MERMAID_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```mermaid[[\s\x{FEFF}]--\x{85}]*\n([\s\S]*?)```")
        .expect("mermaid block regex pattern is valid")
});

/// A fenced `mermaid` block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidBlock<'a> {
    span: Span,
    source: &'a str,
}

impl<'a> MermaidBlock<'a> {
    /// Byte span of the whole block, from the opening fence through the closing fence.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Diagram source between the fences with surrounding whitespace trimmed.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

/// Finds every fenced `mermaid` block in `document`, in document order.
///
/// Matching is leftmost-first and each block ends at the nearest closing
/// fence, so two consecutive blocks are reported separately.
///
/// # Examples
///
/// ```
/// # use inkview_parser::find_mermaid_blocks;
/// let doc = "intro\n```mermaid\npie\n\"A\": 1\n```\noutro";
/// let blocks = find_mermaid_blocks(doc);
///
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].source(), "pie\n\"A\": 1");
/// assert_eq!(&doc[blocks[0].span().range()], "```mermaid\npie\n\"A\": 1\n```");
/// ```
pub fn find_mermaid_blocks(document: &str) -> Vec<MermaidBlock<'_>> {
    let blocks: Vec<_> = MERMAID_BLOCK_REGEX
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let interior = caps.get(1)?;
            Some(MermaidBlock {
                span: Span::new(whole.range()),
                source: trim_content(interior.as_str()),
            })
        })
        .collect();

    debug!(blocks_count = blocks.len(); "Scanned document for mermaid blocks");
    blocks
}
