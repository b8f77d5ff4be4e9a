//! Checkout and order listing.

use chrono::Utc;

use marketstall_core::{Cart, LineItem, Order};

use super::ServiceError;
use crate::db::OrderRepository;

/// Order service.
///
/// Orders are anonymous and immutable once stored.
pub struct OrderService<'a, R: ?Sized> {
    orders: &'a R,
}

impl<'a, R: OrderRepository + ?Sized> OrderService<'a, R> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(orders: &'a R) -> Self {
        Self { orders }
    }

    /// Store the cart as an order stamped with the current server time.
    ///
    /// Line items are stored exactly as given, in order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::EmptyCart` (nothing is stored) if `items` is
    /// absent or empty.
    /// Returns `ServiceError::Persistence` if the insert fails.
    pub async fn place_order(&self, items: Option<Vec<LineItem>>) -> Result<Order, ServiceError> {
        let cart = Cart::from_optional(items)?;

        Ok(self.orders.insert_order(&cart, Utc::now()).await?)
    }

    /// Every stored order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Persistence` if the query fails.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.orders.list_orders().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, RepositoryError, UnavailableStore};

    #[tokio::test]
    async fn test_place_order_echoes_items_and_stamps_time() {
        let store = MemoryStore::new();
        let service = OrderService::new(&store);
        let items = vec![LineItem::new("Tea", 3.0, 2), LineItem::new("Scone", 2.5, 1)];

        let before = Utc::now();
        let order = service.place_order(Some(items.clone())).await.unwrap();

        assert_eq!(order.items, items);
        assert!(order.timestamp >= before);
        assert!(order.timestamp <= Utc::now());
    }

    #[tokio::test]
    async fn test_empty_cart_stores_nothing() {
        let store = MemoryStore::new();
        let service = OrderService::new(&store);

        let missing = service.place_order(None).await;
        let empty = service.place_order(Some(Vec::new())).await;

        assert!(matches!(missing, Err(ServiceError::EmptyCart)));
        assert!(matches!(empty, Err(ServiceError::EmptyCart)));
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn test_list_returns_every_placed_order() {
        let store = MemoryStore::new();
        let service = OrderService::new(&store);

        let mut placed = Vec::new();
        for quantity in 1..=3 {
            let order = service
                .place_order(Some(vec![LineItem::new("Tea", 3.0, quantity)]))
                .await
                .unwrap();
            placed.push(order);
        }

        let listed = service.list_orders().await.unwrap();
        assert_eq!(listed.len(), 3);
        for order in &placed {
            assert!(listed.iter().any(|listed| listed.items == order.items));
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_persistence_error() {
        let service = OrderService::new(&UnavailableStore);

        let placed = service
            .place_order(Some(vec![LineItem::new("Tea", 3.0, 2)]))
            .await;
        let listed = service.list_orders().await;

        assert!(matches!(
            placed,
            Err(ServiceError::Persistence(RepositoryError::Unavailable))
        ));
        assert!(matches!(
            listed,
            Err(ServiceError::Persistence(RepositoryError::Unavailable))
        ));
    }

    #[tokio::test]
    async fn test_empty_cart_checked_before_storage() {
        let service = OrderService::new(&UnavailableStore);

        let result = service.place_order(Some(Vec::new())).await;
        assert!(matches!(result, Err(ServiceError::EmptyCart)));
    }
}
