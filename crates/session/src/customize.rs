//! Product customization state.
//!
//! The customize dialog lets a shopper pick a color swatch, a pattern, and a
//! brightness before adding the piece to the cart. Only the resulting
//! selection lives here; rendering it on the avatar is a view concern.

use serde::{Deserialize, Serialize};

use begeto_core::HexColor;

use crate::cart::{Customization, NewCartLine};
use crate::catalog::Product;

/// Brightness slider bounds, in percent.
const BRIGHTNESS_MIN: u8 = 50;
const BRIGHTNESS_MAX: u8 = 150;

/// Default swatch offered by the customizer.
const DEFAULT_COLOR: &str = "#8B5CF6";

/// Fabric pattern applied over the product's original print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// The product as the maker designed it.
    #[default]
    Original,
    Striped,
    Dotted,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Striped => write!(f, "striped"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "striped" => Ok(Self::Striped),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!("invalid pattern: {s}")),
        }
    }
}

/// The shopper's current customizer selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizeSelection {
    pub color: HexColor,
    pub pattern: Pattern,
    /// Brightness percent, clamped to 50-150; 100 leaves the color as-is.
    brightness: u8,
}

impl Default for CustomizeSelection {
    fn default() -> Self {
        Self {
            // The swatch list always starts with a valid default.
            color: HexColor::parse(DEFAULT_COLOR).unwrap_or_else(|_| unreachable!()),
            pattern: Pattern::Original,
            brightness: 100,
        }
    }
}

impl CustomizeSelection {
    /// A selection with the given color, pattern, and brightness (clamped
    /// to the slider bounds).
    #[must_use]
    pub fn new(color: HexColor, pattern: Pattern, brightness: u8) -> Self {
        Self {
            color,
            pattern,
            brightness: brightness.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX),
        }
    }

    /// Set the brightness percent, clamped to the slider bounds.
    pub fn set_brightness(&mut self, percent: u8) {
        self.brightness = percent.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
    }

    /// Current brightness percent.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// The selected color with brightness applied.
    #[must_use]
    pub fn effective_color(&self) -> HexColor {
        self.color.adjust(i16::from(self.brightness) - 100)
    }

    /// True when the shopper changed anything from the defaults.
    #[must_use]
    pub fn is_customized(&self) -> bool {
        self.pattern != Pattern::Original
            || self.brightness != 100
            || self.color.as_str() != DEFAULT_COLOR
    }

    /// Build the cart line this selection produces for `product`.
    #[must_use]
    pub fn cart_line(
        &self,
        product: Product,
        quantity: u32,
        customizations: Option<Customization>,
    ) -> NewCartLine {
        NewCartLine {
            product,
            quantity,
            selected_color: Some(self.effective_color()),
            selected_pattern: self.pattern,
            customizations,
        }
    }
}
