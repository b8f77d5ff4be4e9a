//! Checkout and order listing handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use marketstall_core::{LineItem, Order};

use crate::error::{AppError, Operation, Result};
use crate::extract::ApiJson;
use crate::services::OrderService;
use crate::state::AppState;

/// Checkout payload.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "cartItems", default)]
    pub cart_items: Option<Vec<LineItem>>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: &'static str,
    pub order: Order,
}

/// Place an order for the submitted cart.
#[instrument(skip(state, request))]
pub async fn checkout(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let order = OrderService::new(state.store())
        .place_order(request.cart_items)
        .await
        .map_err(|e| AppError::from_service(Operation::Checkout, e))?;

    tracing::info!(order_id = %order.id, items = order.items.len(), "Order placed");

    Ok(Json(CheckoutResponse {
        message: "Order placed successfully.",
        order,
    }))
}

/// List every stored order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.store())
        .list_orders()
        .await
        .map_err(|e| AppError::from_service(Operation::ListOrders, e))?;

    Ok(Json(orders))
}
