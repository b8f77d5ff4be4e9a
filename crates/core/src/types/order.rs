//! Stored orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::LineItem;
use super::id::OrderId;

/// A placed order as returned to clients.
///
/// Orders are anonymous: nothing ties them to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Storage-assigned identifier.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Line items exactly as submitted.
    pub items: Vec<LineItem>,
    /// Server time at insertion.
    pub timestamp: DateTime<Utc>,
}
