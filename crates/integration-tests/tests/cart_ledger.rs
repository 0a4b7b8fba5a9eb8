//! Cart ledger properties exercised through the session layer.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use begeto_core::{CurrencyCode, Price, ProductId};
use begeto_session::cart::{CartLedger, CartPatch, LedgerOutcome, NewCartLine};
use begeto_session::catalog::fixtures;

use begeto_integration_tests::demo_session;

fn product_at(index: usize, dollars: i64) -> begeto_session::catalog::Product {
    let mut product = fixtures::demo_catalog()
        .all_products()
        .get(index)
        .cloned()
        .unwrap();
    product.price = Price::from_major(dollars, CurrencyCode::USD);
    product
}

// =============================================================================
// Merge-by-id
// =============================================================================

#[test]
fn test_many_adds_collapse_to_one_line() {
    let mut ledger = CartLedger::new();
    let product = product_at(0, 45);

    for quantity in [1, 2, 3, 4] {
        ledger.add(NewCartLine {
            quantity,
            ..NewCartLine::of(product.clone())
        });
    }

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.line(&product.id).unwrap().quantity, 10);
}

#[test]
fn test_adds_through_session_merge_too() {
    let mut session = demo_session();
    let id = session
        .catalog()
        .all_products()
        .first()
        .map(|p| p.id.clone())
        .unwrap();

    session.add_product(&id, 1);
    session.add_product(&id, 2);

    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().line(&id).unwrap().quantity, 3);
}

// =============================================================================
// Absent ids never throw
// =============================================================================

#[test]
fn test_update_and_remove_after_remove_are_noops() {
    let mut session = demo_session();
    let id = session
        .catalog()
        .all_products()
        .first()
        .map(|p| p.id.clone())
        .unwrap();
    session.add_product(&id, 1);

    assert_eq!(session.remove_cart_line(&id), LedgerOutcome::Applied);
    assert_eq!(
        session.update_cart_line(&id, CartPatch::quantity(5)),
        LedgerOutcome::NotFound
    );
    assert_eq!(session.remove_cart_line(&id), LedgerOutcome::NotFound);
    assert_eq!(
        session.toggle_cart_line(&ProductId::new("ghost")),
        LedgerOutcome::NotFound
    );
    assert!(session.cart().is_empty());
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_selected_lines_match_flags_exactly() {
    let mut session = demo_session();
    let ids: Vec<_> = session
        .catalog()
        .all_products()
        .iter()
        .take(4)
        .map(|p| p.id.clone())
        .collect();
    for id in &ids {
        session.add_product(id, 1);
    }

    session.toggle_cart_line(&ids[1]);
    session.toggle_cart_line(&ids[3]);

    let selected: Vec<_> = session
        .cart()
        .selected_lines()
        .map(|l| l.product_id.clone())
        .collect();
    assert_eq!(selected, vec![ids[0].clone(), ids[2].clone()]);
}

#[test]
fn test_select_all_roundtrip() {
    let mut session = demo_session();
    let ids: Vec<_> = session
        .catalog()
        .all_products()
        .iter()
        .take(3)
        .map(|p| p.id.clone())
        .collect();
    for id in &ids {
        session.add_product(id, 1);
    }

    // All selected: the select-all checkbox deselects everything...
    session.toggle_select_all();
    assert_eq!(session.cart().selected_lines().count(), 0);

    // ...and from a mixed state it selects everything.
    session.toggle_cart_line(&ids[0]);
    session.toggle_select_all();
    assert!(session.cart().all_selected());
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_totals_reference_vector() {
    let mut ledger = CartLedger::new();
    ledger.add(NewCartLine::of(product_at(0, 45)));
    ledger.add(NewCartLine {
        quantity: 2,
        ..NewCartLine::of(product_at(1, 35))
    });

    let totals = ledger.totals();
    assert_eq!(totals.subtotal.amount, Decimal::from(115));
    assert_eq!(totals.shipping.amount, Decimal::from(15));
    assert_eq!(totals.tax.amount, Decimal::new(115, 1));
    assert_eq!(totals.total.amount, Decimal::new(1415, 1));
}

#[test]
fn test_totals_follow_every_mutation() {
    let mut ledger = CartLedger::new();
    let product = product_at(0, 20);
    ledger.add(NewCartLine::of(product.clone()));
    assert_eq!(ledger.totals().subtotal.amount, Decimal::from(20));

    ledger.update(&product.id, CartPatch::quantity(3));
    assert_eq!(ledger.totals().subtotal.amount, Decimal::from(60));

    ledger.update(&product.id, CartPatch::selected(false));
    assert_eq!(ledger.totals().subtotal.amount, Decimal::ZERO);
    assert_eq!(ledger.totals().shipping.amount, Decimal::ZERO);

    ledger.update(&product.id, CartPatch::selected(true));
    ledger.remove(&product.id);
    assert_eq!(ledger.totals().total.amount, Decimal::ZERO);
}
