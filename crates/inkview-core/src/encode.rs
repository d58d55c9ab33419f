//! URL-safe encoding of diagram payloads.

use base64::{Engine as _, engine::general_purpose::URL_SAFE};

/// Encodes the UTF-8 bytes of `text` as URL-safe base64.
///
/// This is standard base64 with `+` replaced by `-` and `/` replaced by
/// `_`. Padding is kept as produced by the standard encoding.
///
/// # Examples
///
/// ```
/// use inkview_core::encode::encode_url_safe;
///
/// assert_eq!(encode_url_safe(""), "");
/// assert_eq!(encode_url_safe("graph TD"), "Z3JhcGggVEQ=");
/// assert_eq!(encode_url_safe("??>"), "Pz8-");
/// ```
pub fn encode_url_safe(text: &str) -> String {
    URL_SAFE.encode(text.as_bytes())
}
