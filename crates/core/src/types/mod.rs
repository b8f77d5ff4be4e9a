//! Core types for Marketstall.
//!
//! This module provides type-safe wrappers for the shop's domain concepts.

pub mod account;
pub mod cart;
pub mod id;
pub mod lenient;
pub mod order;
pub mod price;
pub mod user_type;

pub use account::{Account, AccountKind, BusinessDetails, NewAccount, Profile};
pub use cart::{Cart, CartError, LineItem};
pub use id::*;
pub use order::Order;
pub use price::Price;
pub use user_type::{UserType, UserTypeError};
