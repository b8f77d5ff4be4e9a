//! Marketstall Core - Shared types library.
//!
//! This crate provides the domain types used by the Marketstall components:
//! - `api` - The HTTP service (signup, login, checkout, order listing)
//! - `integration-tests` - Black-box tests against a running service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. Storage documents and wire formats live in the `api`
//! crate and convert into these types.
//!
//! # Modules
//!
//! - [`types`] - Account kinds, carts, orders, prices, and string-backed ids

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
