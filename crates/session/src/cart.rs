//! The cart ledger.
//!
//! An ordered collection of cart lines keyed by product id. Lines merge by
//! id on add, carry a selection flag consulted by checkout, and derive their
//! totals on every read - there is no cached state to invalidate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use begeto_core::{CurrencyCode, HexColor, Price, ProductId};

use crate::catalog::Product;
use crate::customize::Pattern;

/// Flat shipping fee charged whenever any line is selected.
const SHIPPING_FLAT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Tax rate applied to the selected subtotal (10%).
const TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Partial body-measurement set attached to a custom-made line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customization {
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    /// Standard size label (e.g. "M") when given instead of measurements.
    #[serde(default)]
    pub size: Option<String>,
}

/// A line in the cart ledger.
///
/// At most one line exists per product id; adding the same product again
/// increments the quantity of the existing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
    #[serde(default)]
    pub selected_color: Option<HexColor>,
    #[serde(default)]
    pub selected_pattern: Pattern,
    #[serde(default)]
    pub customizations: Option<Customization>,
    /// Whether this line counts toward checkout totals.
    pub selected: bool,
}

impl CartLine {
    /// Extended price for this line (unit price times quantity).
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// A request to add a product to the cart.
///
/// Everything a [`CartLine`] holds except the selection flag, which the
/// ledger sets to `true` for new lines.
#[derive(Debug, Clone)]
pub struct NewCartLine {
    pub product: Product,
    pub quantity: u32,
    pub selected_color: Option<HexColor>,
    pub selected_pattern: Pattern,
    pub customizations: Option<Customization>,
}

impl NewCartLine {
    /// A plain, uncustomized line for one unit of `product`.
    #[must_use]
    pub fn of(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            selected_color: None,
            selected_pattern: Pattern::Original,
            customizations: None,
        }
    }
}

/// A shallow-merge patch for an existing cart line.
///
/// `None` fields are left untouched. A `quantity` of zero is ignored, since
/// the ledger invariant keeps every line at quantity >= 1 (removal is an
/// explicit operation, not a zero-quantity update).
#[derive(Debug, Clone, Default)]
pub struct CartPatch {
    pub quantity: Option<u32>,
    pub selected: Option<bool>,
    pub selected_color: Option<HexColor>,
    pub selected_pattern: Option<Pattern>,
    pub customizations: Option<Customization>,
}

impl CartPatch {
    /// A patch that only changes the quantity.
    #[must_use]
    pub const fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            selected: None,
            selected_color: None,
            selected_pattern: None,
            customizations: None,
        }
    }

    /// A patch that only changes the selection flag.
    #[must_use]
    pub const fn selected(selected: bool) -> Self {
        Self {
            quantity: None,
            selected: Some(selected),
            selected_color: None,
            selected_pattern: None,
            customizations: None,
        }
    }
}

/// Whether a ledger mutation found its target line.
///
/// Callers that want the legacy silent-no-op behavior simply ignore this;
/// callers that care can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    /// The line existed and the mutation was applied.
    Applied,
    /// No line matched the product id; nothing changed.
    NotFound,
}

impl LedgerOutcome {
    /// True if the mutation found and changed a line.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Derived order totals over the selected lines.
///
/// Recomputed from the ledger on every call to [`CartLedger::totals`];
/// never cached, so totals can never go stale after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

/// The ordered cart ledger.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// An empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same product id exists, its quantity is increased
    /// and every other field of the existing line is kept (the first-added
    /// customization wins). Otherwise a new selected line is appended. A
    /// requested quantity of zero is normalized to 1.
    pub fn add(&mut self, new: NewCartLine) {
        let quantity = new.quantity.max(1);
        let product_id = new.product.id.clone();

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += quantity;
            tracing::debug!(%product_id, quantity = line.quantity, "Merged cart line");
            return;
        }

        tracing::debug!(%product_id, quantity, "Added cart line");
        self.lines.push(CartLine {
            product_id,
            product: new.product,
            quantity,
            selected_color: new.selected_color,
            selected_pattern: new.selected_pattern,
            customizations: new.customizations,
            selected: true,
        });
    }

    /// Shallow-merge a patch into the line for `product_id`.
    pub fn update(&mut self, product_id: &ProductId, patch: CartPatch) -> LedgerOutcome {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return LedgerOutcome::NotFound;
        };

        match patch.quantity {
            Some(0) => {
                tracing::debug!(%product_id, "Ignored zero-quantity patch");
            }
            Some(quantity) => line.quantity = quantity,
            None => {}
        }
        if let Some(selected) = patch.selected {
            line.selected = selected;
        }
        if let Some(color) = patch.selected_color {
            line.selected_color = Some(color);
        }
        if let Some(pattern) = patch.selected_pattern {
            line.selected_pattern = pattern;
        }
        if let Some(customizations) = patch.customizations {
            line.customizations = Some(customizations);
        }

        LedgerOutcome::Applied
    }

    /// Remove the line for `product_id`.
    pub fn remove(&mut self, product_id: &ProductId) -> LedgerOutcome {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == before {
            LedgerOutcome::NotFound
        } else {
            LedgerOutcome::Applied
        }
    }

    /// Flip the selection flag on one line.
    pub fn toggle_line(&mut self, product_id: &ProductId) -> LedgerOutcome {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return LedgerOutcome::NotFound;
        };
        line.selected = !line.selected;
        LedgerOutcome::Applied
    }

    /// Set the selection flag on every line.
    pub fn set_all_selected(&mut self, selected: bool) {
        for line in &mut self.lines {
            line.selected = selected;
        }
    }

    /// The select-all checkbox: deselect everything when every line is
    /// already selected, otherwise select everything.
    pub fn toggle_all(&mut self) {
        let target = !self.all_selected();
        self.set_all_selected(target);
    }

    /// True when every line is selected (vacuously true for an empty cart).
    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.lines.iter().all(|l| l.selected)
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Lines flagged for checkout, lazily.
    pub fn selected_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|l| l.selected)
    }

    /// Number of lines (not units) in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line. Used when an order is placed.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derive order totals from the currently selected lines.
    ///
    /// subtotal = sum of selected line prices; shipping is a flat fee when
    /// anything is selected; tax is 10% of the subtotal.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |l| l.product.price.currency_code);

        let subtotal: Decimal = self
            .selected_lines()
            .map(|l| l.product.price.amount * Decimal::from(l.quantity))
            .sum();
        let shipping = if self.selected_lines().next().is_some() {
            SHIPPING_FLAT
        } else {
            Decimal::ZERO
        };
        let tax = subtotal * TAX_RATE;

        CartTotals {
            subtotal: Price::new(subtotal, currency),
            shipping: Price::new(shipping, currency),
            tax: Price::new(tax, currency),
            total: Price::new(subtotal + shipping + tax, currency),
        }
    }
}
