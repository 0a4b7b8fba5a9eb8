//! Scripted end-to-end shopping session.
//!
//! Walks the whole session surface against the configured catalog: sign-in,
//! browsing, customization, cart edits, checkout, and order placement.

use tracing::info;

use begeto_core::UserRole;
use begeto_session::cart::CartPatch;
use begeto_session::catalog::{Category, ProductFilter};
use begeto_session::checkout::ShippingForm;
use begeto_session::customize::{CustomizeSelection, Pattern};
use begeto_session::session::{Page, Session, SignIn};

use crate::config::CliConfig;

/// Run the scripted session.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the script hits a
/// state it does not expect (e.g. an empty catalog).
pub fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_catalog()?;
    let mut session = Session::new(store);

    // Sign in as a buyer; buyers land on home.
    let user = session.sign_in(SignIn {
        name: "Imani".to_owned(),
        email: "imani@example.com".to_owned(),
        role: UserRole::Buyer,
        avatar: None,
    })?;
    info!("Signed in as {} ({})", user.name, user.role);

    // Browse the marketplace with a filter.
    session.navigate_to(Page::Marketplace);
    let filter = ProductFilter {
        categories: vec![Category::Dresses, Category::Tops, Category::Outerwear],
        ..ProductFilter::default()
    };
    let listed: Vec<_> = session
        .catalog()
        .products(&filter)
        .into_iter()
        .map(|p| p.id.clone())
        .collect();
    info!("Marketplace shows {} garments", listed.len());

    let Some(first_id) = listed.first().cloned() else {
        return Err("catalog has no garments to demo with".into());
    };

    // View the first result and add a customized version to the cart.
    session.select_product(&first_id);
    let product = session
        .selected_product()
        .cloned()
        .ok_or("selected product missing after transition")?;
    info!("Viewing {} - {}", product.name, product.price);

    let selection = CustomizeSelection::new(
        begeto_core::HexColor::parse("#8B5CF6")?,
        Pattern::Striped,
        110,
    );
    session.add_to_cart(selection.cart_line(product, 1, None));
    if selection.is_customized() {
        info!(
            "Added {} with custom pattern {} in {}",
            first_id,
            selection.pattern,
            selection.effective_color()
        );
    }

    // Adding the same product again merges into one line.
    session.add_product(&first_id, 1);

    // A second product, then bump its quantity.
    if let Some(second_id) = listed.get(1).cloned() {
        session.add_product(&second_id, 1);
        session.update_cart_line(&second_id, CartPatch::quantity(2));
    }

    let cart = session.cart();
    info!("Cart holds {} lines", cart.len());
    for line in cart.lines() {
        info!(
            "  {} x{} - {} each, {} total",
            line.product.name,
            line.quantity,
            line.product.price,
            line.line_price()
        );
    }
    let totals = cart.totals();
    info!(
        "Subtotal {} + shipping {} + tax {} = {}",
        totals.subtotal, totals.shipping, totals.tax, totals.total
    );

    // Check out.
    session.begin_checkout()?;
    let flow = session
        .checkout_flow_mut()
        .ok_or("checkout flow missing after begin_checkout")?;
    flow.shipping = ShippingForm {
        full_name: "Imani Osei".to_owned(),
        email: "imani@example.com".to_owned(),
        phone: "+1 555 0100".to_owned(),
        address: "12 Market Street".to_owned(),
        city: "Accra".to_owned(),
        state: "Greater Accra".to_owned(),
        zip_code: "00233".to_owned(),
        country: "Ghana".to_owned(),
    };
    flow.submit_shipping()?;
    info!("Shipping accepted, step {}", flow.step().number());
    flow.submit_payment()?;
    info!("Payment accepted, step {}", flow.step().number());

    let confirmation = session.place_order()?;
    info!(
        "Order {} placed for {} at {}",
        confirmation.reference, confirmation.total, confirmation.placed_at
    );
    info!(
        "Back on {} with an empty cart ({} lines)",
        session.current_page(),
        session.cart().len()
    );

    Ok(())
}
