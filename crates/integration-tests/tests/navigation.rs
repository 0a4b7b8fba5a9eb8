//! Navigation guard and sign-in routing scenarios.

#![allow(clippy::unwrap_used)]

use begeto_core::{CreatorId, ProductId, UserRole};
use begeto_session::session::{Page, SignIn};

use begeto_integration_tests::demo_session;

fn sign_in(role: UserRole) -> SignIn {
    SignIn {
        name: "Imani".to_owned(),
        email: "imani@example.com".to_owned(),
        role,
        avatar: None,
    }
}

#[test]
fn test_plain_pages_are_unguarded() {
    let mut session = demo_session();
    for page in [
        Page::Marketplace,
        Page::Makers,
        Page::Cart,
        Page::Checkout,
        Page::Auth,
        Page::Home,
    ] {
        assert_eq!(session.navigate_to(page), page);
    }
}

#[test]
fn test_product_page_guard() {
    let mut session = demo_session();

    // No selected product: the request is refused.
    assert_eq!(session.navigate_to(Page::Product), Page::Home);

    // Unknown id: still refused, selection stays empty.
    assert!(!session.select_product(&ProductId::new("ghost")));
    assert_eq!(session.current_page(), Page::Home);

    // Known id: selection set, page moves.
    let id = session
        .catalog()
        .all_products()
        .first()
        .map(|p| p.id.clone())
        .unwrap();
    assert!(session.select_product(&id));
    assert_eq!(session.current_page(), Page::Product);
    assert_eq!(session.selected_product().unwrap().id, id);
}

#[test]
fn test_creator_profile_guard() {
    let mut session = demo_session();

    assert_eq!(session.navigate_to(Page::CreatorProfile), Page::Home);
    assert!(!session.select_creator(&CreatorId::new("ghost")));

    let id = session
        .catalog()
        .creators()
        .first()
        .map(|c| c.id.clone())
        .unwrap();
    assert!(session.select_creator(&id));
    assert_eq!(session.current_page(), Page::CreatorProfile);

    // Once a creator is selected, direct navigation works too.
    session.navigate_to(Page::Makers);
    assert_eq!(session.navigate_to(Page::CreatorProfile), Page::CreatorProfile);
}

#[test]
fn test_dashboard_guard_tracks_role() {
    let mut session = demo_session();

    assert_eq!(session.navigate_to(Page::CreatorDashboard), Page::Home);

    session.sign_in(sign_in(UserRole::Buyer)).unwrap();
    assert_eq!(session.navigate_to(Page::CreatorDashboard), Page::Home);

    session.sign_in(sign_in(UserRole::Creator)).unwrap();
    session.navigate_to(Page::Home);
    assert_eq!(
        session.navigate_to(Page::CreatorDashboard),
        Page::CreatorDashboard
    );

    // Signing out closes the dashboard again.
    session.sign_out();
    assert_eq!(session.navigate_to(Page::CreatorDashboard), Page::Home);
}

#[test]
fn test_sign_in_lands_on_role_start_page() {
    let mut session = demo_session();

    session.sign_in(sign_in(UserRole::Buyer)).unwrap();
    assert_eq!(session.current_page(), Page::Home);

    session.sign_in(sign_in(UserRole::Creator)).unwrap();
    assert_eq!(session.current_page(), Page::CreatorDashboard);
}

#[test]
fn test_failed_sign_in_changes_nothing() {
    let mut session = demo_session();
    session.navigate_to(Page::Auth);

    let result = session.sign_in(SignIn {
        email: "missing-at-sign".to_owned(),
        ..sign_in(UserRole::Buyer)
    });

    assert!(result.is_err());
    assert!(session.user().is_none());
    assert_eq!(session.current_page(), Page::Auth);
}
