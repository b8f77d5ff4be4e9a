//! Document storage for accounts and orders.
//!
//! # Database: `MongoDB`
//!
//! ## Collections
//!
//! - `customers` - Customer accounts (`userType: "customer"`)
//! - `businessowners` - Business owner accounts (`userType: "business"`)
//! - `orders` - Placed orders (line items plus timestamp)
//!
//! No indexes, uniqueness constraints, or migrations: every collection is
//! append-only from this service's point of view.
//!
//! # Implementations
//!
//! - [`MongoStore`] - The production store
//! - [`MemoryStore`] - In-process store for tests and local runs
//! - [`UnavailableStore`] - Stand-in when no connection string is configured

pub mod accounts;
pub mod memory;
pub mod orders;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use mongodb::{Client, Database};
use secrecy::{ExposeSecret, SecretString};

use marketstall_core::{Account, AccountId, Cart, NewAccount, Order, UserType};

pub use accounts::MongoAccountRepository;
pub use memory::MemoryStore;
pub use orders::MongoOrderRepository;

/// Database used when neither the configuration nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Error reported by the `MongoDB` driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A stored document could not be mapped to a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// No database connection is configured.
    #[error("database unavailable: no connection configured")]
    Unavailable,
}

/// Account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account in the collection for its kind.
    ///
    /// No uniqueness check: registering the same email twice stores two
    /// independent accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the insert fails.
    async fn insert_account(&self, account: &NewAccount) -> Result<AccountId, RepositoryError>;

    /// Find one account of `user_type` whose stored email and password both
    /// equal the given values (exact, case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_account(
        &self,
        user_type: UserType,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store an order for `cart`, stamped with `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the insert fails.
    async fn insert_order(
        &self,
        cart: &Cart,
        timestamp: DateTime<Utc>,
    ) -> Result<Order, RepositoryError>;

    /// Every stored order, in storage-native order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError>;
}

/// Everything the HTTP layer needs from storage.
#[async_trait]
pub trait Store: AccountRepository + OrderRepository {
    /// Check that the backing database answers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the database is unreachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

// =============================================================================
// MongoDB
// =============================================================================

/// `MongoDB`-backed store.
///
/// The driver's client pools connections internally; one store is created at
/// startup and shared by every request.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    accounts: MongoAccountRepository,
    orders: MongoOrderRepository,
}

impl MongoStore {
    /// Create a store over an existing database handle.
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self {
            accounts: MongoAccountRepository::new(&database),
            orders: MongoOrderRepository::new(&database),
            database,
        }
    }

    /// Name of the database this store writes to.
    #[must_use]
    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

/// Create a `MongoDB` client and select the database.
///
/// The driver connects lazily, so this succeeds for any well-formed URI even
/// when the server is down; call [`Store::ping`] to check reachability.
///
/// # Arguments
///
/// * `uri` - `MongoDB` connection string (wrapped in `SecretString`)
/// * `database` - Database name; defaults to the URI's, else [`DEFAULT_DATABASE`]
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the URI cannot be parsed or resolved.
pub async fn connect(
    uri: &SecretString,
    database: Option<&str>,
) -> Result<MongoStore, RepositoryError> {
    let client = Client::with_uri_str(uri.expose_secret()).await?;

    let database = match database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    Ok(MongoStore::new(database))
}

#[async_trait]
impl AccountRepository for MongoStore {
    async fn insert_account(&self, account: &NewAccount) -> Result<AccountId, RepositoryError> {
        self.accounts.insert_account(account).await
    }

    async fn find_account(
        &self,
        user_type: UserType,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        self.accounts.find_account(user_type, email, password).await
    }
}

#[async_trait]
impl OrderRepository for MongoStore {
    async fn insert_order(
        &self,
        cart: &Cart,
        timestamp: DateTime<Utc>,
    ) -> Result<Order, RepositoryError> {
        self.orders.insert_order(cart, timestamp).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        self.orders.list_orders().await
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

// =============================================================================
// Unconfigured
// =============================================================================

/// Store used when no connection string is configured.
///
/// Every operation fails with [`RepositoryError::Unavailable`], so the service
/// keeps running and answers data requests with 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

#[async_trait]
impl AccountRepository for UnavailableStore {
    async fn insert_account(&self, _account: &NewAccount) -> Result<AccountId, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn find_account(
        &self,
        _user_type: UserType,
        _email: &str,
        _password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}

#[async_trait]
impl OrderRepository for UnavailableStore {
    async fn insert_order(
        &self,
        _cart: &Cart,
        _timestamp: DateTime<Utc>,
    ) -> Result<Order, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}

#[async_trait]
impl Store for UnavailableStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}
