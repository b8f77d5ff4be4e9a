//! Account collections.
//!
//! Customers and business owners live in separate collections with the same
//! document shape; business fields are simply absent on customer documents.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use marketstall_core::{
    Account, AccountId, AccountKind, BusinessDetails, NewAccount, Profile, UserType,
};

use super::{AccountRepository, RepositoryError};

/// Collection holding customer accounts.
pub const CUSTOMERS: &str = "customers";
/// Collection holding business owner accounts.
pub const BUSINESS_OWNERS: &str = "businessowners";

/// Collection name for an account kind.
#[must_use]
pub const fn collection_name(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Customer => CUSTOMERS,
        UserType::Business => BUSINESS_OWNERS,
    }
}

/// Stored shape of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_type: Option<String>,
    user_type: UserType,
}

impl From<&NewAccount> for AccountDocument {
    fn from(account: &NewAccount) -> Self {
        let business = account.kind.business().cloned().unwrap_or_default();
        Self {
            id: None,
            name: account.profile.name.clone(),
            email: account.profile.email.clone(),
            phone: account.profile.phone.clone(),
            password: account.profile.password.clone(),
            business_name: business.business_name,
            business_address: business.business_address,
            business_type: business.business_type,
            user_type: account.user_type(),
        }
    }
}

impl AccountDocument {
    /// Map a document read from `collection` back to a domain account.
    fn into_account(self, collection: UserType) -> Result<Account, RepositoryError> {
        let id = self.id.ok_or_else(|| {
            RepositoryError::DataCorruption("account document without _id".to_owned())
        })?;

        if self.user_type != collection {
            return Err(RepositoryError::DataCorruption(format!(
                "account {id} has userType {} but lives in {}",
                self.user_type,
                collection_name(collection)
            )));
        }

        let profile = Profile {
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password,
        };
        let business = BusinessDetails {
            business_name: self.business_name,
            business_address: self.business_address,
            business_type: self.business_type,
        };

        Ok(Account {
            id: AccountId::new(id.to_hex()),
            profile,
            kind: AccountKind::new(collection, business),
        })
    }
}

/// `MongoDB` repository for both account collections.
#[derive(Clone)]
pub struct MongoAccountRepository {
    customers: Collection<AccountDocument>,
    business_owners: Collection<AccountDocument>,
}

impl MongoAccountRepository {
    /// Create a new account repository.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            customers: database.collection(CUSTOMERS),
            business_owners: database.collection(BUSINESS_OWNERS),
        }
    }

    const fn collection(&self, user_type: UserType) -> &Collection<AccountDocument> {
        match user_type {
            UserType::Customer => &self.customers,
            UserType::Business => &self.business_owners,
        }
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn insert_account(&self, account: &NewAccount) -> Result<AccountId, RepositoryError> {
        let document = AccountDocument::from(account);
        let result = self
            .collection(account.user_type())
            .insert_one(&document)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| AccountId::new(id.to_hex()))
            .ok_or_else(|| {
                RepositoryError::DataCorruption(format!(
                    "inserted account id is not an ObjectId: {}",
                    result.inserted_id
                ))
            })
    }

    async fn find_account(
        &self,
        user_type: UserType,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let document = self
            .collection(user_type)
            .find_one(doc! { "email": email, "password": password })
            .await?;

        document
            .map(|document| document.into_account(user_type))
            .transpose()
    }
}
