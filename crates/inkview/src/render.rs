//! Rendering of previewable documents.
//!
//! Diagram content becomes a single image reference. Markdown content is
//! passed through with each fenced `mermaid` block swapped for an image
//! reference.

use log::debug;

use inkview_core::content::ContentType;
use inkview_parser::find_mermaid_blocks;

use crate::image::ImageUrlBuilder;

/// Replaces every fenced `mermaid` block in `document` with image markup
/// built by `images`. Text outside the blocks is copied unchanged.
pub(crate) fn substitute_blocks(images: &ImageUrlBuilder, document: &str) -> String {
    let blocks = find_mermaid_blocks(document);
    if blocks.is_empty() {
        return document.to_string();
    }

    let mut rendered = String::with_capacity(document.len());
    let mut cursor = 0;
    for block in &blocks {
        let span = block.span();
        rendered.push_str(&document[cursor..span.start()]);
        rendered.push_str(&images.markup(block.source()));
        cursor = span.end();
    }
    rendered.push_str(&document[cursor..]);

    debug!(blocks_count = blocks.len(); "Substituted mermaid blocks");
    rendered
}

/// Renders `content` as `kind` using `images`.
pub(crate) fn render_with(images: &ImageUrlBuilder, kind: ContentType, content: &str) -> String {
    match kind {
        ContentType::Mermaid => images.markup(content),
        ContentType::Markdown => substitute_blocks(images, content),
    }
}

/// Replaces every fenced `mermaid` block in `document` with an image
/// reference on the default service.
///
/// # Examples
///
/// ```
/// # use inkview::{build_image_url, substitute_diagram_blocks};
/// let doc = "before\n```mermaid\ngraph TD\nA-->B\n```\nafter";
/// let expected = format!(
///     "before\n![Mermaid Diagram]({})\nafter",
///     build_image_url("graph TD\nA-->B")
/// );
/// assert_eq!(substitute_diagram_blocks(doc), expected);
/// assert_eq!(substitute_diagram_blocks("no blocks here"), "no blocks here");
/// ```
pub fn substitute_diagram_blocks(document: &str) -> String {
    substitute_blocks(&ImageUrlBuilder::default(), document)
}

/// Renders `content` as the declared `kind` on the default service.
///
/// The declared kind is always honored; call
/// [`classify`](inkview_parser::classify) separately to get a suggestion.
///
/// # Examples
///
/// ```
/// # use inkview::{build_image_url, render};
/// # use inkview_core::content::ContentType;
/// let source = "graph TD\nA-->B";
/// assert_eq!(
///     render(ContentType::Mermaid, source),
///     format!("![Mermaid Diagram]({})", build_image_url(source))
/// );
/// ```
pub fn render(kind: ContentType, content: &str) -> String {
    render_with(&ImageUrlBuilder::default(), kind, content)
}
