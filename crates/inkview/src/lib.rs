//! Inkview - Preview Markdown and Mermaid text as renderable documents.
//!
//! Text is either Mermaid diagram source or Markdown that may embed fenced
//! `mermaid` blocks. Diagrams are turned into image references on a remote
//! rendering service (`https://mermaid.ink` by default), so the result is a
//! Markdown document any viewer can display.
//!
//! Detection and rendering are separate steps: [`classify`] suggests a
//! [`ContentType`](content::ContentType), and [`render`] honors whatever type
//! the caller declares.

pub mod config;
pub mod image;
pub mod session;

mod error;
mod render;

pub use inkview_core::{color, content, encode, keyword, theme};
pub use inkview_parser::classify;

pub use error::InkviewError;
pub use image::build_image_url;
pub use render::{render, substitute_diagram_blocks};

use log::{debug, info};

use config::AppConfig;
use content::ContentType;
use image::ImageUrlBuilder;
use session::PreviewState;

/// Renders previews with a fixed configuration.
///
/// # Examples
///
/// ```rust
/// use inkview::{Previewer, config::AppConfig, content::ContentType};
///
/// let previewer = Previewer::new(AppConfig::default())
///     .expect("default configuration is valid");
///
/// let doc = previewer.render(ContentType::Markdown, "# Plan\n```mermaid\ngantt\n```");
/// assert!(doc.starts_with("# Plan\n![Mermaid Diagram](https://mermaid.ink/img/"));
///
/// // Or use the default configuration directly
/// let previewer = Previewer::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Previewer {
    images: ImageUrlBuilder,
}

impl Previewer {
    /// Create a new previewer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `InkviewError::Config` if the configured service URL,
    /// background color or theme directive is invalid.
    pub fn new(config: AppConfig) -> Result<Self, InkviewError> {
        let images = ImageUrlBuilder::from_config(&config)?;
        debug!(
            base_url = images.base_url(),
            background = images.background_hex();
            "Previewer configured"
        );
        Ok(Self { images })
    }

    /// Returns the image reference builder used by this previewer.
    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    /// Returns the image URL for diagram `source`.
    pub fn image_url(&self, source: &str) -> String {
        self.images.url(source)
    }

    /// Replaces every fenced `mermaid` block in `document` with an image reference.
    pub fn substitute_blocks(&self, document: &str) -> String {
        render::substitute_blocks(&self.images, document)
    }

    /// Renders `content` as the declared `kind`.
    pub fn render(&self, kind: ContentType, content: &str) -> String {
        info!(content_type:% = kind, content_len = content.len(); "Rendering preview");
        render::render_with(&self.images, kind, content)
    }

    /// Renders the content of `state` as its declared type.
    ///
    /// Returns `None` when there is nothing to preview.
    pub fn preview(&self, state: &PreviewState) -> Option<String> {
        if !state.has_content() {
            return None;
        }

        Some(self.render(state.declared(), state.content()))
    }
}
