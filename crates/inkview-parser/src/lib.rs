//! # Inkview Parser
//!
//! Scanning of user-supplied text for the Inkview preview pipeline. This
//! crate answers two questions about a text:
//!
//! 1. **What is it?** [`classify`] sniffs the first token and suggests a
//!    [`ContentType`](inkview_core::content::ContentType).
//! 2. **Where are the diagrams?** [`find_mermaid_blocks`] locates every
//!    fenced `mermaid` block inside formatted text.
//!
//! ## Usage
//!
//! ```
//! # use inkview_core::content::ContentType;
//! # use inkview_parser::{classify, find_mermaid_blocks};
//! let doc = "# Notes\n\n```mermaid\ngraph TD\nA-->B\n```\n";
//!
//! assert_eq!(classify(doc), ContentType::Markdown);
//!
//! let blocks = find_mermaid_blocks(doc);
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].source(), "graph TD\nA-->B");
//! ```

mod classify;
mod fence;
mod span;

pub use classify::classify;
pub use fence::{MermaidBlock, find_mermaid_blocks};
pub use span::Span;
