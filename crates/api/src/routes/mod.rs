//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (pings the database)
//!
//! # Accounts
//! POST /signup        - Register a customer or business owner
//! POST /login         - Plaintext credential login
//!
//! # Orders
//! POST /checkout      - Store the submitted cart as an order
//! GET  /orders        - List every order
//! ```

pub mod accounts;
pub mod health;
pub mod orders;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/signup", post(accounts::signup))
        .route("/login", post(accounts::login))
        .route("/checkout", post(orders::checkout))
        .route("/orders", get(orders::list))
}

/// Build the application with tracing and request-id middleware.
///
/// Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
