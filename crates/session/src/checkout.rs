//! Checkout step sequencer.
//!
//! A linear three-step flow: Shipping -> Payment -> Review. Forward moves
//! are gated on form completeness; backward moves never discard entered
//! data. There is no real payment - the payment form is the hard-coded
//! placeholder the demo ships with.

use serde::{Deserialize, Serialize};

use thiserror::Error;

/// Errors produced by the checkout sequencer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A forward step was requested with required fields still blank.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The order was placed from a step other than Review.
    #[error("order can only be placed from the review step")]
    NotAtReview,

    /// Checkout was started with no cart lines selected.
    #[error("no items selected for checkout")]
    NothingSelected,
}

/// Position in the checkout flow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    /// 1-based step number shown in the progress indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }
}

/// Shipping address form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingForm {
    /// Names of required fields that are still blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, &str); 8] = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("country", &self.country),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// True when every required field is filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Payment form.
///
/// A stand-in for a real payment integration: the fields default to the
/// processor's public test values and are only checked for non-blankness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            card_number: "4242 4242 4242 4242".to_owned(),
            expiry: "12/26".to_owned(),
            cvc: "123".to_owned(),
        }
    }
}

impl PaymentForm {
    /// Names of required fields that are still blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, &str); 3] = [
            ("card_number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvc", &self.cvc),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// The checkout flow: current step plus both forms.
///
/// Forms are owned by the flow for its whole lifetime, so stepping backward
/// and forward again never loses entered data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    pub shipping: ShippingForm,
    pub payment: PaymentForm,
}

impl CheckoutFlow {
    /// A fresh flow at the shipping step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Submit the shipping form, advancing to Payment.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] (and stays on Shipping) if
    /// any required field is blank.
    pub fn submit_shipping(&mut self) -> Result<(), CheckoutError> {
        let missing = self.shipping.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Shipping form incomplete");
            return Err(CheckoutError::MissingFields(missing));
        }
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Submit the payment form, advancing to Review.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] (and stays on Payment) if
    /// any field is blank.
    pub fn submit_payment(&mut self) -> Result<(), CheckoutError> {
        let missing = self.payment.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Payment form incomplete");
            return Err(CheckoutError::MissingFields(missing));
        }
        self.step = CheckoutStep::Review;
        Ok(())
    }

    /// Step backward (Payment -> Shipping, Review -> Payment).
    ///
    /// A no-op at the Shipping step. Entered data is kept.
    pub fn back(&mut self) {
        self.step = match self.step {
            CheckoutStep::Shipping | CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
        };
    }

    /// True when the flow has reached Review with both forms complete.
    #[must_use]
    pub fn ready_to_place(&self) -> bool {
        self.step == CheckoutStep::Review
            && self.shipping.is_complete()
            && self.payment.missing_fields().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_shipping() -> ShippingForm {
        ShippingForm {
            full_name: "Imani Osei".to_owned(),
            email: "imani@example.com".to_owned(),
            phone: "+1 555 0100".to_owned(),
            address: "12 Market Street".to_owned(),
            city: "Accra".to_owned(),
            state: "Greater Accra".to_owned(),
            zip_code: "00233".to_owned(),
            country: "Ghana".to_owned(),
        }
    }

    #[test]
    fn test_flow_starts_at_shipping() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(flow.step().number(), 1);
    }

    #[test]
    fn test_incomplete_shipping_does_not_advance() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = ShippingForm {
            city: String::new(),
            ..complete_shipping()
        };

        let err = flow.submit_shipping().unwrap_err();
        assert_eq!(err, CheckoutError::MissingFields(vec!["city"]));
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_blank_only_fields_count_as_missing() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = ShippingForm {
            phone: "   ".to_owned(),
            ..complete_shipping()
        };

        assert!(matches!(
            flow.submit_shipping(),
            Err(CheckoutError::MissingFields(fields)) if fields == vec!["phone"]
        ));
    }

    #[test]
    fn test_complete_shipping_advances_to_payment() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = complete_shipping();

        flow.submit_shipping().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_payment_defaults_advance_to_review() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = complete_shipping();
        flow.submit_shipping().unwrap();

        // The placeholder payment form is prefilled with test values.
        flow.submit_payment().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Review);
    }

    #[test]
    fn test_blank_payment_does_not_advance() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = complete_shipping();
        flow.submit_shipping().unwrap();
        flow.payment.cvc = String::new();

        assert!(flow.submit_payment().is_err());
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_back_preserves_shipping_data() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = complete_shipping();
        flow.submit_shipping().unwrap();

        flow.back();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(flow.shipping, complete_shipping());

        // Forward again without re-entering anything.
        flow.submit_shipping().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_back_is_noop_at_shipping() {
        let mut flow = CheckoutFlow::new();
        flow.back();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_ready_to_place_only_at_review() {
        let mut flow = CheckoutFlow::new();
        flow.shipping = complete_shipping();
        assert!(!flow.ready_to_place());

        flow.submit_shipping().unwrap();
        assert!(!flow.ready_to_place());

        flow.submit_payment().unwrap();
        assert!(flow.ready_to_place());
    }
}
