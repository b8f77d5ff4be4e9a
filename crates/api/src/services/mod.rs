//! Business logic services.
//!
//! # Services
//!
//! - `accounts` - Registration and plaintext credential login
//! - `orders` - Checkout and order listing
//!
//! Services are generic over the repository traits so the same code runs
//! against `MongoDB` in production and the in-memory store in tests.

mod accounts;
mod error;
mod orders;

pub use accounts::AccountService;
pub use error::ServiceError;
pub use orders::OrderService;
