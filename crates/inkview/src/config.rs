//! Configuration types for Inkview previews.
//!
//! This module provides configuration structures that control where diagram
//! images are rendered and how they are styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining service and style settings.
//! - [`ServiceConfig`] - Controls which rendering service image references point at.
//! - [`StyleConfig`] - Controls the background color and theme directive of diagrams.
//!
//! Every value is optional and falls back to the dark theme served by
//! `https://mermaid.ink`.
//!
//! # Example
//!
//! ```
//! # use inkview::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.service().base_url().unwrap(), "https://mermaid.ink");
//! assert_eq!(config.style().background_color().unwrap().to_hex(), "1a1a1a");
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use inkview_core::{
    color::Color,
    theme::{DARK_THEME_DIRECTIVE, DIRECTIVE_MARKER, is_themed},
};
use inkview_parser::Span;

/// Base URL of the public Mermaid rendering service.
pub const DEFAULT_SERVICE_URL: &str = "https://mermaid.ink";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {message}")]
    Parse {
        message: String,
        span: Option<Span>,
        src: String,
    },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid `{field}` in configuration: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(
        message: impl Into<String>,
        span: Option<Span>,
        src: impl Into<String>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}

/// Top-level application configuration combining service and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rendering service configuration section.
    #[serde(default)]
    service: ServiceConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified service and style configurations.
    pub fn new(service: ServiceConfig, style: StyleConfig) -> Self {
        Self { service, style }
    }

    /// Returns the rendering service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Where image references point.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the rendering service, without the `/img/` path.
    #[serde(default)]
    base_url: Option<String>,
}

impl ServiceConfig {
    /// Creates a [`ServiceConfig`] pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    /// Returns the configured base URL without trailing slashes, or
    /// [`DEFAULT_SERVICE_URL`] when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the URL is not an `http` or
    /// `https` URL.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        let Some(base_url) = self.base_url.as_deref() else {
            return Ok(DEFAULT_SERVICE_URL);
        };

        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));

        if !has_host {
            return Err(ConfigError::Invalid {
                field: "service.base_url",
                reason: format!("`{base_url}` is not an http(s) URL"),
            });
        }

        Ok(trimmed)
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the dark theme.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] requested from the renderer, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Directive prepended to diagrams that carry none.
    #[serde(default)]
    theme_directive: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    ///
    /// # Arguments
    ///
    /// * `background_color` - CSS color string for the image background.
    /// * `theme_directive` - Mermaid directive injected into unthemed diagrams.
    pub fn new(background_color: Option<String>, theme_directive: Option<String>) -> Self {
        Self {
            background_color,
            theme_directive,
        }
    }

    /// Returns the parsed background [`Color`], or the dark theme background
    /// if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, ConfigError> {
        match &self.background_color {
            Some(color) => Color::new(color).map_err(|reason| ConfigError::Invalid {
                field: "style.background_color",
                reason,
            }),
            None => Ok(Color::default()),
        }
    }

    /// Returns the theme directive, or [`DARK_THEME_DIRECTIVE`] if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured directive does not start with
    /// the `%%{` marker.
    pub fn theme_directive(&self) -> Result<&str, ConfigError> {
        match self.theme_directive.as_deref() {
            Some(directive) if is_themed(directive) => Ok(directive.trim_end()),
            Some(_) => Err(ConfigError::Invalid {
                field: "style.theme_directive",
                reason: format!("a directive must start with `{DIRECTIVE_MARKER}`"),
            }),
            None => Ok(DARK_THEME_DIRECTIVE),
        }
    }
}
