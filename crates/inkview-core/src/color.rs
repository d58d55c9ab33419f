//! Color handling for rendered previews
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. The remote renderer takes background colors as bare
//! hex digits, so [`Color::to_hex`] is the main way colors leave this crate.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#1a1a1a", "rgb(26, 26, 26)", "black", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use inkview_core::color::Color;
    ///
    /// let dark = Color::new("#1a1a1a").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the six lowercase hex digits of this color in sRGB, without a
    /// leading `#`. The alpha channel is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use inkview_core::color::Color;
    ///
    /// assert_eq!(Color::new("#1A1A1A").unwrap().to_hex(), "1a1a1a");
    /// assert_eq!(Color::new("red").unwrap().to_hex(), "ff0000");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(&format!("#{}", crate::theme::DEFAULT_BACKGROUND_HEX))
            .expect("default background is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
