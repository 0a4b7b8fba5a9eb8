//! Integration tests for Begeto.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p begeto-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - Full browse-to-order session scenarios
//! - `cart_ledger` - Cart merge, selection, and totals properties
//! - `navigation` - Page transition guards and sign-in routing
//!
//! Everything runs against the built-in demo catalog; no external services
//! are involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use begeto_session::catalog::fixtures;
use begeto_session::checkout::ShippingForm;
use begeto_session::session::Session;

/// A fresh session over the demo catalog.
#[must_use]
pub fn demo_session() -> Session {
    Session::new(fixtures::demo_catalog())
}

/// A shipping form with every required field filled in.
#[must_use]
pub fn complete_shipping() -> ShippingForm {
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
