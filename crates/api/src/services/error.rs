//! Service error types.

use thiserror::Error;

use marketstall_core::{CartError, UserTypeError};

use crate::db::RepositoryError;

/// Errors that can occur in a shop operation.
///
/// Every variant is raised before or instead of a side effect, except
/// `Persistence`, which wraps the failed storage call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The `userType` discriminator was absent or not a known kind.
    #[error("invalid user type")]
    InvalidUserType,

    /// Checkout was attempted with no line items.
    #[error("cart is empty")]
    EmptyCart,

    /// No account matched the email and password (or the email is unknown).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The storage call failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] RepositoryError),
}

impl From<UserTypeError> for ServiceError {
    fn from(_: UserTypeError) -> Self {
        Self::InvalidUserType
    }
}

impl From<CartError> for ServiceError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::Empty => Self::EmptyCart,
        }
    }
}
