//! Editor state for interactive previews.
//!
//! [`PreviewState`] keeps the content and the user's declared
//! [`ContentType`] as independent values. The detected type is derived from
//! the content on demand, so a disagreement between the two is a pure check
//! ([`PreviewState::mismatch`]) rather than something to keep in sync.

use std::fmt;

use log::debug;

use inkview_core::content::{ContentType, trim_content};
use inkview_parser::classify;

/// Content being edited together with the type the user wants it rendered as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    content: String,
    declared: ContentType,
}

impl PreviewState {
    /// Creates a state with `content` declared as `declared`.
    pub fn new(content: impl Into<String>, declared: ContentType) -> Self {
        Self {
            content: content.into(),
            declared,
        }
    }

    /// Returns the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the type the content will be rendered as.
    pub fn declared(&self) -> ContentType {
        self.declared
    }

    /// Replaces the content without touching the declared type.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Sets the type the content will be rendered as.
    pub fn set_declared(&mut self, declared: ContentType) {
        self.declared = declared;
    }

    /// Returns the type the content looks like.
    pub fn detected(&self) -> ContentType {
        classify(&self.content)
    }

    /// Returns `true` if the content is not blank.
    pub fn has_content(&self) -> bool {
        !trim_content(&self.content).is_empty()
    }

    /// Returns the placeholder for the declared type.
    pub fn placeholder(&self) -> &'static str {
        self.declared.placeholder()
    }

    /// Returns the disagreement between the declared and detected types, if any.
    ///
    /// Blank content never mismatches.
    pub fn mismatch(&self) -> Option<TypeMismatch> {
        if !self.has_content() {
            return None;
        }

        let detected = self.detected();
        (detected != self.declared).then_some(TypeMismatch {
            declared: self.declared,
            detected,
        })
    }

    /// Replaces the content with pasted `text` and adopts its detected type.
    ///
    /// Returns the detected type, or `None` if `text` is empty, in which case
    /// nothing changes.
    pub fn paste(&mut self, text: &str) -> Option<ContentType> {
        if text.is_empty() {
            return None;
        }

        let detected = classify(text);
        self.content = text.to_string();
        self.declared = detected;
        debug!(content_type:% = detected; "Detected pasted content");
        Some(detected)
    }

    /// Declares the content as its detected type and returns that type.
    pub fn switch_to_detected(&mut self) -> ContentType {
        self.declared = self.detected();
        self.declared
    }
}

/// A declared type that differs from what the content looks like.
///
/// This is advisory: rendering still uses the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    declared: ContentType,
    detected: ContentType,
}

impl TypeMismatch {
    /// Returns the type the content will be rendered as.
    pub fn declared(&self) -> ContentType {
        self.declared
    }

    /// Returns the type the content looks like.
    pub fn detected(&self) -> ContentType {
        self.detected
    }

    /// Short warning shown next to the content, e.g. `This looks like Mermaid code`.
    pub fn warning(&self) -> String {
        format!("This looks like {} code", self.detected)
    }

    /// Advisory title, e.g. `Rendering as Markdown`.
    pub fn title(&self) -> String {
        format!("Rendering as {}", self.declared)
    }

    /// Advisory message, e.g. `Content looks like Mermaid`.
    pub fn message(&self) -> String {
        format!("Content looks like {}", self.detected)
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}
