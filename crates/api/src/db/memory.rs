//! In-process store.
//!
//! Same matching semantics as the `MongoDB` collections: exact, case-sensitive
//! email and password comparison, insertion-ordered listing, no uniqueness.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use marketstall_core::{Account, AccountId, Cart, NewAccount, Order, OrderId, UserType};

use super::{AccountRepository, OrderRepository, RepositoryError, Store};

/// Store backed by process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
    orders: RwLock<Vec<Order>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts of a kind.
    pub async fn account_count(&self, user_type: UserType) -> usize {
        self.accounts
            .read()
            .await
            .iter()
            .filter(|account| account.user_type() == user_type)
            .count()
    }

    /// Number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

/// A fresh id in the same format `MongoDB` assigns.
fn next_id() -> String {
    ObjectId::new().to_hex()
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn insert_account(&self, account: &NewAccount) -> Result<AccountId, RepositoryError> {
        let id = AccountId::new(next_id());
        self.accounts
            .write()
            .await
            .push(Account::from_new(id.clone(), account.clone()));
        Ok(id)
    }

    async fn find_account(
        &self,
        user_type: UserType,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| {
                account.user_type() == user_type
                    && account.profile.email.as_deref() == Some(email)
                    && account.profile.password.as_deref() == Some(password)
            })
            .cloned())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn insert_order(
        &self,
        cart: &Cart,
        timestamp: DateTime<Utc>,
    ) -> Result<Order, RepositoryError> {
        let order = Order {
            id: OrderId::new(next_id()),
            items: cart.items().to_vec(),
            timestamp,
        };
        self.orders.write().await.push(order.clone());
        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.read().await.clone())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
