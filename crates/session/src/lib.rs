//! Begeto shopping session library.
//!
//! The in-memory core of the Begeto marketplace demo: a read-only product
//! catalog, the cart ledger, session/navigation state, the checkout step
//! sequencer, product customization state, and the locally persisted
//! measurement draft.
//!
//! Everything here is synchronous and single-threaded by design - state
//! transitions run to completion inside discrete user actions, and the only
//! persistent resource is the measurement draft file.
//!
//! # Modules
//!
//! - [`catalog`] - Immutable product/creator records and filtered lookup
//! - [`cart`] - The cart ledger: merge-by-id lines, selection, derived totals
//! - [`session`] - Top-level session state and navigation transitions
//! - [`checkout`] - Three-step checkout form sequencer
//! - [`customize`] - Color/pattern customization feeding cart lines
//! - [`measurements`] - Body-measurement draft persistence

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customize;
pub mod measurements;
pub mod session;
