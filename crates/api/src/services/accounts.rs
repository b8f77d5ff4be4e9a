//! Account registration and login.

use marketstall_core::{Account, AccountId, BusinessDetails, NewAccount, Profile, UserType};

use super::ServiceError;
use crate::db::AccountRepository;

/// Account service.
///
/// Credentials are stored and compared in plaintext. Duplicate emails are
/// allowed, and a failed login never says whether the email exists.
pub struct AccountService<'a, R: ?Sized> {
    accounts: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> AccountService<'a, R> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(accounts: &'a R) -> Self {
        Self { accounts }
    }

    /// Register a customer or business owner.
    ///
    /// `user_type` is the raw discriminator from the request; `None` stands
    /// for an absent or non-string value. Business details are only stored
    /// for business owners.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUserType` (nothing is stored) if the
    /// discriminator is not `customer` or `business`.
    /// Returns `ServiceError::Persistence` if the insert fails.
    pub async fn register(
        &self,
        user_type: Option<&str>,
        profile: Profile,
        business: BusinessDetails,
    ) -> Result<AccountId, ServiceError> {
        let user_type = parse_user_type(user_type)?;
        let account = NewAccount::new(user_type, profile, business);

        Ok(self.accounts.insert_account(&account).await?)
    }

    /// Log in with email, password, and account kind.
    ///
    /// Returns the full stored account, password included.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUserType` if the discriminator is unknown.
    /// Returns `ServiceError::AuthenticationFailed` if no account of that kind
    /// has exactly this email and password.
    /// Returns `ServiceError::Persistence` if the lookup fails.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        user_type: Option<&str>,
    ) -> Result<Account, ServiceError> {
        let user_type = parse_user_type(user_type)?;

        self.accounts
            .find_account(user_type, email, password)
            .await?
            .ok_or(ServiceError::AuthenticationFailed)
    }
}

fn parse_user_type(user_type: Option<&str>) -> Result<UserType, ServiceError> {
    Ok(user_type
        .ok_or(ServiceError::InvalidUserType)?
        .parse::<UserType>()?)
}
