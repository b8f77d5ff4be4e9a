//! Shopping cart submitted at checkout.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::price::Price;

/// Errors that can occur when building a [`Cart`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The cart was absent or had no line items.
    #[error("cart is empty")]
    Empty,
}

/// One entry of a cart or order.
///
/// Every field is optional and stored as given: a partial item is kept
/// partial, and price and quantity are not checked for sign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name.
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Number of units.
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<i64>,
}

impl LineItem {
    /// Create a fully specified line item.
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<Price>, quantity: i64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price.into()),
            quantity: Some(quantity),
        }
    }
}

/// A cart with at least one line item.
///
/// ## Examples
///
/// ```
/// use marketstall_core::{Cart, LineItem};
///
/// assert!(Cart::new(vec![LineItem::new("Tea", 3.0, 2)]).is_ok());
/// assert!(Cart::new(vec![]).is_err());
/// assert!(Cart::from_optional(None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cart(Vec<LineItem>);

impl Cart {
    /// Build a cart from its line items.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] if `items` is empty.
    pub fn new(items: Vec<LineItem>) -> Result<Self, CartError> {
        if items.is_empty() {
            return Err(CartError::Empty);
        }
        Ok(Self(items))
    }

    /// Build a cart from an optional request field.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] if `items` is `None` or empty.
    pub fn from_optional(items: Option<Vec<LineItem>>) -> Result<Self, CartError> {
        items.map_or(Err(CartError::Empty), Self::new)
    }

    /// The line items, in the order they were submitted.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    /// Number of line items (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart has no line items. Never true for a built cart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the cart and return its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<LineItem> {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_rejected() {
        assert_eq!(Cart::new(Vec::new()), Err(CartError::Empty));
        assert_eq!(Cart::from_optional(None), Err(CartError::Empty));
        assert_eq!(Cart::from_optional(Some(Vec::new())), Err(CartError::Empty));
    }

    #[test]
    fn test_cart_preserves_item_order() {
        let items = vec![
            LineItem::new("Tea", 3.0, 2),
            LineItem::new("Scone", 2.5, 1),
            LineItem::new("Jam", 4.0, 0),
        ];
        let cart = Cart::new(items.clone()).unwrap();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.items(), items.as_slice());
        assert_eq!(cart.into_items(), items);
    }

    #[test]
    fn test_negative_values_are_kept() {
        let cart = Cart::new(vec![LineItem::new("Refund", -5.0, -1)]).unwrap();
        let item = cart.items().first().unwrap();
        assert_eq!(item.price, Some(Price::new(-5.0)));
        assert_eq!(item.quantity, Some(-1));
    }

    #[test]
    fn test_line_item_wire_format() {
        let item: LineItem =
            serde_json::from_str(r#"{"name":"Tea","price":3,"quantity":2}"#).unwrap();
        assert_eq!(item, LineItem::new("Tea", 3.0, 2));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"name": "Tea", "price": 3, "quantity": 2})
        );
    }

    #[test]
    fn test_partial_line_item_kept_partial() {
        let item: LineItem = serde_json::from_str(r#"{"name":"Tea","price":3}"#).unwrap();
        assert_eq!(item.name.as_deref(), Some("Tea"));
        assert_eq!(item.price, Some(Price::new(3.0)));
        assert_eq!(item.quantity, None);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"name": "Tea", "price": 3})
        );
    }

    #[test]
    fn test_line_item_coerces_scalars() {
        let item: LineItem =
            serde_json::from_str(r#"{"name":42,"price":"2.5","quantity":"3"}"#).unwrap();
        assert_eq!(item, LineItem::new("42", 2.5, 3));
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        let result =
            serde_json::from_str::<LineItem>(r#"{"name":"Tea","price":3,"quantity":1.5}"#);
        assert!(result.is_err());
    }
}
