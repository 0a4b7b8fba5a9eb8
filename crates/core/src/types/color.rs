//! Hex color type for product customization.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ColorError {
    /// The input does not start with `#`.
    #[error("color must start with '#'")]
    MissingHash,
    /// The input is not 7 characters (`#` plus 6 hex digits).
    #[error("color must be '#' followed by 6 hex digits")]
    BadLength,
    /// The input contains a non-hex digit.
    #[error("color contains a non-hex digit")]
    BadHexDigit,
}

/// A `#RRGGBB` color, as picked in the product customizer.
///
/// Stored in canonical uppercase form, so `#8b5cf6` and `#8B5CF6` compare
/// equal after parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `HexColor` from a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing the leading `#`, is not
    /// exactly 7 characters, or contains a non-hex digit.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

        if digits.len() != 6 {
            return Err(ColorError::BadLength);
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadHexDigit);
        }

        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Returns the color as a `#RRGGBB` string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green, and blue channels.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range| {
            self.0
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    /// Lighten (positive percent) or darken (negative percent) the color.
    ///
    /// Each channel moves by `round(2.55 * percent)`, clamped to `0..=255`,
    /// matching the customizer's brightness slider behavior.
    #[must_use]
    pub fn adjust(&self, percent: i16) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let amt = (2.55 * f64::from(percent)).round() as i16;
        let shift = |channel: u8| -> u8 {
            u8::try_from((i16::from(channel) + amt).clamp(0, 255)).unwrap_or(u8::MAX)
        };

        let (r, g, b) = self.rgb();
        Self(format!("#{:02X}{:02X}{:02X}", shift(r), shift(g), shift(b)))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
