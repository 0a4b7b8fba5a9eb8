//! Begeto Core - Shared types library.
//!
//! This crate provides common types used across all Begeto components:
//! - `session` - Shopping session state (catalog, cart, checkout)
//! - `cli` - Command-line tools for browsing the catalog and running demos
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no UI concerns.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, colors,
//!   and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
