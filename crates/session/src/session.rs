//! Top-level shopping session state and navigation.
//!
//! One [`Session`] owns everything the user is currently looking at: the
//! page, the selected product/creator, the cart ledger, the signed-in user,
//! and the active checkout flow. Subordinate views get read-only borrows;
//! every mutation goes through the transition methods here.
//!
//! Missing references (unknown product id, unknown creator id) leave the
//! session unchanged rather than failing - the UI treats them as render
//! guards, so the transition layer logs and moves on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use begeto_core::{CreatorId, Email, EmailError, OrderId, Price, ProductId, UserId, UserRole};

use crate::cart::{CartLedger, CartPatch, LedgerOutcome, NewCartLine};
use crate::catalog::{CatalogStore, Creator, Product};
use crate::checkout::{CheckoutError, CheckoutFlow};

/// Pages the session can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Marketplace,
    Product,
    Makers,
    Cart,
    Checkout,
    Auth,
    CreatorProfile,
    CreatorDashboard,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Home => "home",
            Self::Marketplace => "marketplace",
            Self::Product => "product",
            Self::Makers => "makers",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Auth => "auth",
            Self::CreatorProfile => "creator-profile",
            Self::CreatorDashboard => "creator-dashboard",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "marketplace" => Ok(Self::Marketplace),
            "product" => Ok(Self::Product),
            "makers" => Ok(Self::Makers),
            "cart" => Ok(Self::Cart),
            "checkout" => Ok(Self::Checkout),
            "auth" => Ok(Self::Auth),
            "creator-profile" => Ok(Self::CreatorProfile),
            "creator-dashboard" => Ok(Self::CreatorDashboard),
            _ => Err(format!("invalid page: {s}")),
        }
    }
}

/// A signed-in user. Exists only for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Sign-in/sign-up request. Authentication is mocked; the request becomes
/// the session user directly.
#[derive(Debug, Clone)]
pub struct SignIn {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: Option<String>,
}

/// Errors that can occur during mock sign-in.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Receipt for a placed order.
///
/// Nothing is persisted; the confirmation is the only record the demo
/// produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub reference: OrderId,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

/// The shopping session: catalog handle plus all mutable view state.
#[derive(Debug)]
pub struct Session {
    catalog: CatalogStore,
    current_page: Page,
    selected_product: Option<Product>,
    selected_creator: Option<Creator>,
    cart: CartLedger,
    user: Option<User>,
    checkout: Option<CheckoutFlow>,
}

impl Session {
    /// Start a fresh session on the home page.
    #[must_use]
    pub const fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            current_page: Page::Home,
            selected_product: None,
            selected_creator: None,
            cart: CartLedger::new(),
            user: None,
            checkout: None,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    #[must_use]
    pub const fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    #[must_use]
    pub const fn selected_creator(&self) -> Option<&Creator> {
        self.selected_creator.as_ref()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The active checkout flow, if checkout has begun.
    #[must_use]
    pub const fn checkout_flow(&self) -> Option<&CheckoutFlow> {
        self.checkout.as_ref()
    }

    /// Mutable access to the active checkout flow for form entry and
    /// step submission.
    pub const fn checkout_flow_mut(&mut self) -> Option<&mut CheckoutFlow> {
        self.checkout.as_mut()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Request a page by name.
    ///
    /// Unconditional except for the render guards: `product` needs a
    /// selected product, `creator-profile` a selected creator, and
    /// `creator-dashboard` a signed-in creator. A refused transition leaves
    /// the current page unchanged.
    ///
    /// Returns the (possibly unchanged) current page.
    pub fn navigate_to(&mut self, page: Page) -> Page {
        let allowed = match page {
            Page::Product => self.selected_product.is_some(),
            Page::CreatorProfile => self.selected_creator.is_some(),
            Page::CreatorDashboard => self
                .user
                .as_ref()
                .is_some_and(|u| u.role == UserRole::Creator),
            _ => true,
        };

        if allowed {
            tracing::debug!(from = %self.current_page, to = %page, "Navigating");
            self.current_page = page;
        } else {
            tracing::warn!(requested = %page, "Navigation refused by render guard");
        }
        self.current_page
    }

    /// View a product: resolve it from the catalog and go to the product
    /// page. Unknown ids leave the session unchanged.
    ///
    /// Returns whether the transition happened.
    pub fn select_product(&mut self, id: &ProductId) -> bool {
        let Some(product) = self.catalog.product(id) else {
            tracing::warn!(%id, "Product not found");
            return false;
        };
        self.selected_product = Some(product.clone());
        self.current_page = Page::Product;
        true
    }

    /// View a creator profile: resolve from the catalog and go to the
    /// profile page. Unknown ids leave the session unchanged.
    ///
    /// Returns whether the transition happened.
    pub fn select_creator(&mut self, id: &CreatorId) -> bool {
        let Some(creator) = self.catalog.creator(id) else {
            tracing::warn!(%id, "Creator not found");
            return false;
        };
        self.selected_creator = Some(creator.clone());
        self.current_page = Page::CreatorProfile;
        true
    }

    // =========================================================================
    // Authentication (mocked)
    // =========================================================================

    /// Complete sign-in and land on the role's start page: creators go to
    /// their dashboard, buyers go home.
    ///
    /// # Errors
    ///
    /// Returns [`SignInError::InvalidEmail`] if the email does not parse;
    /// the session stays signed out.
    pub fn sign_in(&mut self, request: SignIn) -> Result<&User, SignInError> {
        let email = Email::parse(&request.email)?;
        let name = if request.name.trim().is_empty() {
            "Test User".to_owned()
        } else {
            request.name
        };

        let user = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name,
            email,
            role: request.role,
            avatar: request.avatar,
        };
        tracing::info!(user = %user.id, role = %user.role, "Signed in");

        self.current_page = match user.role {
            UserRole::Creator => Page::CreatorDashboard,
            UserRole::Buyer => Page::Home,
        };
        Ok(self.user.insert(user))
    }

    /// Sign out and return home.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.id, "Signed out");
        }
        self.current_page = Page::Home;
    }

    // =========================================================================
    // Cart routing
    // =========================================================================

    /// Add a (possibly customized) line to the cart.
    pub fn add_to_cart(&mut self, line: NewCartLine) {
        self.cart.add(line);
    }

    /// Add `quantity` units of a catalog product, uncustomized.
    ///
    /// Returns whether the product id resolved.
    pub fn add_product(&mut self, id: &ProductId, quantity: u32) -> bool {
        let Some(product) = self.catalog.product(id) else {
            tracing::warn!(%id, "Product not found");
            return false;
        };
        self.cart.add(NewCartLine {
            quantity,
            ..NewCartLine::of(product.clone())
        });
        true
    }

    /// Patch a cart line. Absent ids are a logged no-op.
    pub fn update_cart_line(&mut self, id: &ProductId, patch: CartPatch) -> LedgerOutcome {
        let outcome = self.cart.update(id, patch);
        if !outcome.is_applied() {
            tracing::warn!(%id, "Cart update targeted a missing line");
        }
        outcome
    }

    /// Remove a cart line. Absent ids are a logged no-op.
    pub fn remove_cart_line(&mut self, id: &ProductId) -> LedgerOutcome {
        let outcome = self.cart.remove(id);
        if !outcome.is_applied() {
            tracing::warn!(%id, "Cart removal targeted a missing line");
        }
        outcome
    }

    /// Flip one line's checkout selection.
    pub fn toggle_cart_line(&mut self, id: &ProductId) -> LedgerOutcome {
        self.cart.toggle_line(id)
    }

    /// The select-all checkbox.
    pub fn toggle_select_all(&mut self) {
        self.cart.toggle_all();
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Start checkout over the currently selected lines.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NothingSelected`] when no line is selected;
    /// the page does not change.
    pub fn begin_checkout(&mut self) -> Result<&CheckoutFlow, CheckoutError> {
        if self.cart.selected_lines().next().is_none() {
            return Err(CheckoutError::NothingSelected);
        }
        self.current_page = Page::Checkout;
        Ok(self.checkout.insert(CheckoutFlow::new()))
    }

    /// Place the order: terminal action that empties the cart, drops the
    /// checkout flow, and returns home.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NothingSelected`] if checkout never began,
    /// or [`CheckoutError::NotAtReview`] if the flow has not reached a
    /// complete Review step.
    pub fn place_order(&mut self) -> Result<OrderConfirmation, CheckoutError> {
        let flow = self.checkout.as_ref().ok_or(CheckoutError::NothingSelected)?;
        if !flow.ready_to_place() {
            return Err(CheckoutError::NotAtReview);
        }

        let confirmation = OrderConfirmation {
            reference: OrderId::new(Uuid::new_v4().to_string()),
            total: self.cart.totals().total,
            placed_at: Utc::now(),
        };
        tracing::info!(reference = %confirmation.reference, total = %confirmation.total, "Order placed");

        self.cart.clear();
        self.checkout = None;
        self.current_page = Page::Home;
        Ok(confirmation)
    }
}
