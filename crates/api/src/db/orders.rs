//! Order collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use marketstall_core::{Cart, LineItem, Order, OrderId, Price, lenient};

use super::{OrderRepository, RepositoryError};

/// Collection holding placed orders.
pub const ORDERS: &str = "orders";

/// Stored shape of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OrderDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    items: Vec<LineItemDocument>,
    timestamp: bson::DateTime,
}

/// Stored shape of a line item. Absent fields stay absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LineItemDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    /// Documents written by JavaScript drivers store whole numbers as
    /// `Int32`, `Int64`, or an integral `Double` depending on their size.
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    quantity: Option<i64>,
}

impl From<&LineItem> for LineItemDocument {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.map(Price::amount),
            quantity: item.quantity,
        }
    }
}

impl From<LineItemDocument> for LineItem {
    fn from(document: LineItemDocument) -> Self {
        Self {
            name: document.name,
            price: document.price.map(Price::new),
            quantity: document.quantity,
        }
    }
}

impl OrderDocument {
    fn new(cart: &Cart, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: None,
            items: cart.items().iter().map(LineItemDocument::from).collect(),
            timestamp: bson::DateTime::from_millis(timestamp.timestamp_millis()),
        }
    }

    fn into_order(self) -> Result<Order, RepositoryError> {
        let id = self.id.ok_or_else(|| {
            RepositoryError::DataCorruption("order document without _id".to_owned())
        })?;

        let timestamp = DateTime::<Utc>::from_timestamp_millis(self.timestamp.timestamp_millis())
            .ok_or_else(|| {
                RepositoryError::DataCorruption(format!("order {id} has an out-of-range timestamp"))
            })?;

        Ok(Order {
            id: OrderId::new(id.to_hex()),
            items: self.items.into_iter().map(LineItem::from).collect(),
            timestamp,
        })
    }
}

/// `MongoDB` repository for orders.
#[derive(Clone)]
pub struct MongoOrderRepository {
    orders: Collection<OrderDocument>,
}

impl MongoOrderRepository {
    /// Create a new order repository.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            orders: database.collection(ORDERS),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    /// The returned order carries `timestamp` at full precision; the stored
    /// copy is truncated to milliseconds.
    async fn insert_order(
        &self,
        cart: &Cart,
        timestamp: DateTime<Utc>,
    ) -> Result<Order, RepositoryError> {
        let document = OrderDocument::new(cart, timestamp);
        let result = self.orders.insert_one(&document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "inserted order id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        Ok(Order {
            id: OrderId::new(id.to_hex()),
            items: cart.items().to_vec(),
            timestamp,
        })
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        let documents: Vec<OrderDocument> = self.orders.find(doc! {}).await?.try_collect().await?;

        documents.into_iter().map(OrderDocument::into_order).collect()
    }
}
