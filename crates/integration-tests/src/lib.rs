//! Integration tests for the Marketstall API.
//!
//! These tests drive a running server over HTTP and are ignored by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB and the server
//! MONGO_URI=mongodb://localhost:27017/marketstall cargo run -p marketstall-api
//!
//! # Run the ignored tests
//! cargo test -p marketstall-integration-tests -- --ignored
//! ```
//!
//! Set `MARKETSTALL_BASE_URL` to target a server other than
//! `http://localhost:5000`.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use marketstall_core::Order;

/// Default server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("MARKETSTALL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// An email no other test run has used.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4().simple())
}

/// Body of every `{ "message": ... }` response.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Body of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub message: String,
    pub user: Value,
}

/// Body of a successful checkout.
#[derive(Debug, Deserialize)]
pub struct CheckoutBody {
    pub message: String,
    pub order: Order,
}
