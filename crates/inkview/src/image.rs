//! Image references for the remote diagram renderer.
//!
//! An image reference has the shape
//! `<base>/img/<payload>?bgColor=!<hex>`, where the payload is the themed
//! diagram source in URL-safe base64. Nothing here talks to the network.

use std::borrow::Cow;

use log::trace;

use inkview_core::{
    encode::encode_url_safe,
    theme::{DARK_THEME_DIRECTIVE, DEFAULT_BACKGROUND_HEX, apply_theme_with},
};

use crate::config::{AppConfig, ConfigError, DEFAULT_SERVICE_URL};

/// Alt text of every generated image reference.
pub const DIAGRAM_ALT_TEXT: &str = "Mermaid Diagram";

/// Builds image URLs and image markup for diagram source.
///
/// The default builder targets `https://mermaid.ink` with the dark theme.
///
/// # Examples
///
/// ```
/// # use inkview::image::ImageUrlBuilder;
/// let images = ImageUrlBuilder::default();
/// let url = images.url("graph TD\nA-->B");
///
/// assert!(url.starts_with("https://mermaid.ink/img/"));
/// assert!(url.ends_with("?bgColor=!1a1a1a"));
/// ```
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: Cow<'static, str>,
    background_hex: Cow<'static, str>,
    theme_directive: Cow<'static, str>,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(DEFAULT_SERVICE_URL),
            background_hex: Cow::Borrowed(DEFAULT_BACKGROUND_HEX),
            theme_directive: Cow::Borrowed(DARK_THEME_DIRECTIVE),
        }
    }
}

impl ImageUrlBuilder {
    /// Creates a builder from the service and style sections of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a malformed base URL, background
    /// color or theme directive.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let base_url = config.service().base_url()?.to_string();
        let background_hex = config.style().background_color()?.to_hex();
        let theme_directive = config.style().theme_directive()?.to_string();

        Ok(Self {
            base_url: Cow::Owned(base_url),
            background_hex: Cow::Owned(background_hex),
            theme_directive: Cow::Owned(theme_directive),
        })
    }

    /// Returns the base URL of the rendering service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the background color as bare hex digits.
    pub fn background_hex(&self) -> &str {
        &self.background_hex
    }

    /// Returns the directive injected into unthemed diagrams.
    pub fn theme_directive(&self) -> &str {
        &self.theme_directive
    }

    /// Returns the image URL for `source`, injecting the theme directive if
    /// `source` does not start with one.
    pub fn url(&self, source: &str) -> String {
        let themed = apply_theme_with(&self.theme_directive, source);
        let payload = encode_url_safe(&themed);
        trace!(source_len = source.len(), payload_len = payload.len(); "Encoded diagram");

        format!(
            "{}/img/{}?bgColor=!{}",
            self.base_url, payload, self.background_hex
        )
    }

    /// Returns `![Mermaid Diagram](<url>)` for `source`.
    pub fn markup(&self, source: &str) -> String {
        format!("![{DIAGRAM_ALT_TEXT}]({})", self.url(source))
    }
}

/// Returns the image URL for `source` on the default service with the dark theme.
///
/// # Examples
///
/// ```
/// # use inkview::build_image_url;
/// let url = build_image_url("pie\n\"Dogs\": 3");
/// assert!(url.starts_with("https://mermaid.ink/img/"));
/// assert!(!url.contains('+'));
/// ```
pub fn build_image_url(source: &str) -> String {
    ImageUrlBuilder::default().url(source)
}

#[cfg(test)]
mod tests {
    use inkview_core::theme::apply_theme;

    use crate::config::{ServiceConfig, StyleConfig};

    use super::*;

    #[test]
    fn test_default_url_shape() {
        let source = "graph TD\nA-->B";
        let expected = format!(
            "https://mermaid.ink/img/{}?bgColor=!1a1a1a",
            encode_url_safe(&apply_theme(source))
        );
        assert_eq!(build_image_url(source), expected);
    }

    #[test]
    fn test_themed_source_is_encoded_verbatim() {
        let source = "%%{init: {'theme': 'dark'}}%%\ngraph TD";
        let url = build_image_url(source);
        assert!(url.contains(&encode_url_safe(source)));
    }

    #[test]
    fn test_default_matches_default_config() {
        let from_config = ImageUrlBuilder::from_config(&AppConfig::default()).unwrap();
        let default = ImageUrlBuilder::default();
        assert_eq!(from_config.base_url(), default.base_url());
        assert_eq!(from_config.background_hex(), default.background_hex());
        assert_eq!(from_config.theme_directive(), default.theme_directive());
    }

    #[test]
    fn test_default_background_agrees_with_color_default() {
        use inkview_core::color::Color;

        assert_eq!(ImageUrlBuilder::default().background_hex(), Color::default().to_hex());
    }

    #[test]
    fn test_custom_config() {
        let config = AppConfig::new(
            ServiceConfig::new("http://localhost:3000/"),
            StyleConfig::new(
                Some("white".to_string()),
                Some("%%{init: {'theme': 'default'}}%%".to_string()),
            ),
        );
        let images = ImageUrlBuilder::from_config(&config).unwrap();
        let url = images.url("gantt");

        let payload = encode_url_safe("%%{init: {'theme': 'default'}}%%\ngantt");
        assert_eq!(url, format!("http://localhost:3000/img/{payload}?bgColor=!ffffff"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AppConfig::new(
            ServiceConfig::default(),
            StyleConfig::new(Some("#zzz".to_string()), None),
        );
        assert!(ImageUrlBuilder::from_config(&config).is_err());
    }

    #[test]
    fn test_markup() {
        let images = ImageUrlBuilder::default();
        assert_eq!(
            images.markup("pie"),
            format!("![Mermaid Diagram]({})", images.url("pie"))
        );
    }
}
