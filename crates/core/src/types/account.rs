//! Customer and business-owner accounts.
//!
//! Both kinds share a [`Profile`]; business owners add [`BusinessDetails`].
//! Which kind an account is decides which collection it is stored in, so the
//! stored `userType` always matches its collection.
//!
//! Every field is optional, as in a schema-less document: a signup payload is
//! stored with whatever account fields it carried. Scalar values are kept in
//! their textual form, so a numeric `phone` is stored as a string.

use serde::{Deserialize, Serialize};

use super::id::AccountId;
use super::lenient;
use super::user_type::UserType;

/// Fields shared by every account kind.
///
/// The password is stored and returned in plaintext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
}

/// Fields only business owners carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_address: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_type: Option<String>,
}

/// Kind-specific part of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    Customer,
    Business(BusinessDetails),
}

impl AccountKind {
    /// Pick the kind for a discriminator.
    ///
    /// Business details are dropped for customers.
    #[must_use]
    pub fn new(user_type: UserType, business: BusinessDetails) -> Self {
        match user_type {
            UserType::Customer => Self::Customer,
            UserType::Business => Self::Business(business),
        }
    }

    /// The discriminator stored alongside the account.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        match self {
            Self::Customer => UserType::Customer,
            Self::Business(_) => UserType::Business,
        }
    }

    /// Business details, for business owners.
    #[must_use]
    pub const fn business(&self) -> Option<&BusinessDetails> {
        match self {
            Self::Customer => None,
            Self::Business(details) => Some(details),
        }
    }
}

/// An account about to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub profile: Profile,
    pub kind: AccountKind,
}

impl NewAccount {
    /// Assemble an account of the given kind.
    #[must_use]
    pub fn new(user_type: UserType, profile: Profile, business: BusinessDetails) -> Self {
        Self {
            profile,
            kind: AccountKind::new(user_type, business),
        }
    }

    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.kind.user_type()
    }
}

/// A stored account.
///
/// Serializes to the flat document shape clients see:
/// `{ "_id", "name", "email", "phone", "password", ["businessName", ...], "userType" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AccountRecord", into = "AccountRecord")]
pub struct Account {
    pub id: AccountId,
    pub profile: Profile,
    pub kind: AccountKind,
}

impl Account {
    /// Attach a storage id to a registered account.
    #[must_use]
    pub fn from_new(id: AccountId, account: NewAccount) -> Self {
        Self {
            id,
            profile: account.profile,
            kind: account.kind,
        }
    }

    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.kind.user_type()
    }
}

/// Flat wire shape of [`Account`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    #[serde(rename = "_id")]
    id: AccountId,
    #[serde(flatten)]
    profile: Profile,
    #[serde(flatten)]
    business: Option<BusinessDetails>,
    user_type: UserType,
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        let user_type = account.user_type();
        let business = match account.kind {
            AccountKind::Customer => None,
            AccountKind::Business(details) => Some(details),
        };
        Self {
            id: account.id,
            profile: account.profile,
            business,
            user_type,
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            profile: record.profile,
            kind: AccountKind::new(record.user_type, record.business.unwrap_or_default()),
        }
    }
}
