//! Error adapter for converting InkviewError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. TOML parse errors
//! keep their source text, so they are rendered with a labelled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use inkview::{InkviewError, config::ConfigError};
use inkview_parser::Span;

/// Adapter for a configuration parse error with source text.
pub struct ConfigDiagnostic<'a> {
    /// Parser message
    message: &'a str,
    /// Location of the error in `src`, when the parser reported one
    span: Option<Span>,
    /// Configuration text for displaying snippets
    src: &'a str,
}

impl<'a> ConfigDiagnostic<'a> {
    /// Create a new configuration diagnostic.
    pub fn new(message: &'a str, span: Option<Span>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for ConfigDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDiagnostic")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ConfigDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse TOML configuration: {}", self.message)
    }
}

impl std::error::Error for ConfigDiagnostic<'_> {}

impl MietteDiagnostic for ConfigDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("inkview::config::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "the configuration accepts a [service] section with `base_url` and a [style] section with `background_color` and `theme_directive`",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(self.message.to_string()),
            span_to_miette(span),
        ))))
    }
}

/// Adapter for [`InkviewError`] variants without source text.
pub struct ErrorAdapter<'a>(pub &'a InkviewError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            InkviewError::Io(_) => "inkview::io",
            InkviewError::Config(ConfigError::Parse { .. }) => "inkview::config::parse",
            InkviewError::Config(ConfigError::MissingFile(_)) => "inkview::config::missing",
            InkviewError::Config(ConfigError::Invalid { .. }) => "inkview::config::invalid",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            InkviewError::Config(ConfigError::MissingFile(_)) => Some(Box::new(
                "pass an existing file to --config, or omit it to use the default search paths",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a configuration diagnostic or a plain error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A configuration parse error with source location information.
    Diagnostic(ConfigDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an inkview [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert an [`InkviewError`] into a reportable error.
///
/// Configuration parse errors become a [`Reportable::Diagnostic`] carrying
/// the configuration text; everything else is a [`Reportable::Error`].
pub fn to_reportable(err: &InkviewError) -> Reportable<'_> {
    match err {
        InkviewError::Config(ConfigError::Parse { message, span, src }) => {
            Reportable::Diagnostic(ConfigDiagnostic::new(message, *span, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
