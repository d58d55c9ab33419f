//! Theme directive injection for Mermaid diagram source.
//!
//! The remote renderer reads styling from a `%%{init: ...}%%` directive at
//! the top of the diagram. [`apply_theme`] prepends the dark
//! [`DARK_THEME_DIRECTIVE`] unless the source already carries a directive.

use std::borrow::Cow;

use log::trace;

/// Marker that opens a Mermaid directive block.
pub const DIRECTIVE_MARKER: &str = "%%{";

/// Background color matching the [`DARK_THEME_DIRECTIVE`] palette, as bare hex digits.
pub const DEFAULT_BACKGROUND_HEX: &str = "1a1a1a";

/// Dark palette directive injected into diagrams that carry no directive.
pub const DARK_THEME_DIRECTIVE: &str = "%%{init: {'theme': 'base', 'themeVariables': {
  'primaryColor': '#3b82f6',
  'primaryTextColor': '#ffffff',
  'primaryBorderColor': '#60a5fa',
  'lineColor': '#9ca3af',
  'secondaryColor': '#6366f1',
  'tertiaryColor': '#8b5cf6',
  'background': '#1a1a1a',
  'mainBkg': '#1a1a1a',
  'nodeBorder': '#60a5fa',
  'clusterBkg': '#262626',
  'titleColor': '#ffffff',
  'edgeLabelBackground': '#1a1a1a'
}}}%%";

/// Returns `true` if `source` starts with [`DIRECTIVE_MARKER`].
///
/// Leading whitespace is significant: `"  %%{init: ...}%%"` is not themed.
pub fn is_themed(source: &str) -> bool {
    source.starts_with(DIRECTIVE_MARKER)
}

/// Prepends [`DARK_THEME_DIRECTIVE`] to `source` unless it is already themed.
///
/// # Examples
///
/// ```
/// use inkview_core::theme::{apply_theme, DARK_THEME_DIRECTIVE};
///
/// let themed = apply_theme("graph TD\nA-->B");
/// assert_eq!(themed, format!("{DARK_THEME_DIRECTIVE}\ngraph TD\nA-->B"));
///
/// let custom = "%%{init: {'theme': 'forest'}}%%\ngraph TD";
/// assert_eq!(apply_theme(custom), custom);
/// ```
pub fn apply_theme(source: &str) -> Cow<'_, str> {
    apply_theme_with(DARK_THEME_DIRECTIVE, source)
}

/// Prepends `directive` and a newline to `source` unless it is already themed.
///
/// The rest of `source` is left byte-for-byte intact.
pub fn apply_theme_with<'a>(directive: &str, source: &'a str) -> Cow<'a, str> {
    if is_themed(source) {
        trace!("Diagram source carries its own directive");
        return Cow::Borrowed(source);
    }

    let mut themed = String::with_capacity(directive.len() + 1 + source.len());
    themed.push_str(directive);
    themed.push('\n');
    themed.push_str(source);
    Cow::Owned(themed)
}
