//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures storage errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`, and every error response has the body
//! `{ "message": "..." }`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::ServiceError;

/// The request that was being served, for choosing a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Signup,
    Login,
    Checkout,
    ListOrders,
}

impl Operation {
    /// Generic message returned when storage fails during this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed.",
            Self::Login => "Login failed.",
            Self::Checkout => "Failed to place order.",
            Self::ListOrders => "Failed to fetch orders.",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::Checkout => "checkout",
            Self::ListOrders => "list orders",
        })
    }
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// `userType` was absent or unknown.
    #[error("Invalid user type")]
    InvalidUserType,

    /// Checkout without line items.
    #[error("Empty cart")]
    EmptyCart,

    /// No account matched the credentials.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The request body could not be decoded. Holds the decoder's
    /// diagnostic, which is logged but never returned.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A storage call failed.
    #[error("{operation} failed: {source}")]
    Persistence {
        operation: Operation,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    /// Map a service error raised while serving `operation`.
    #[must_use]
    pub fn from_service(operation: Operation, err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidUserType => Self::InvalidUserType,
            ServiceError::EmptyCart => Self::EmptyCart,
            ServiceError::AuthenticationFailed => Self::AuthenticationFailed,
            ServiceError::Persistence(source) => Self::Persistence { operation, source },
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUserType | Self::EmptyCart | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Never includes storage diagnostics.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidUserType => "Invalid user type.".to_string(),
            Self::EmptyCart => "Cart is empty or invalid.".to_string(),
            Self::AuthenticationFailed => "Invalid email or password.".to_string(),
            Self::MalformedBody(_) => "Invalid request body.".to_string(),
            Self::Persistence { operation, .. } => operation.failure_message().to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Capture server errors to Sentry
            Self::Persistence { .. } => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
            }
            Self::MalformedBody(detail) => {
                tracing::info!(detail = %detail, "Rejected request body");
            }
            _ => {}
        }

        let body = ErrorBody {
            message: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
