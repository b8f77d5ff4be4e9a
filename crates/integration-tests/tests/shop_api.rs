//! End-to-end scenarios against a running server.
//!
//! These tests require:
//! - A running `MongoDB` instance
//! - The API server running (cargo run -p marketstall-api)

use reqwest::{Client, StatusCode};
use serde_json::json;

use marketstall_core::{LineItem, Order};
use marketstall_integration_tests::{
    CheckoutBody, LoginBody, MessageBody, base_url, unique_email,
};

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_customer_signup_and_login() {
    let client = Client::new();
    let base_url = base_url();
    let email = unique_email("customer");

    let resp = client
        .post(format!("{base_url}/signup"))
        .json(&json!({
            "name": "A",
            "email": email,
            "phone": "1",
            "password": "p",
            "userType": "customer",
        }))
        .send()
        .await
        .expect("Failed to sign up");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: MessageBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.message, "User registered successfully!");

    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "email": email, "password": "p", "userType": "customer" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: LoginBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.message, "Login successful!");
    assert_eq!(body.user["email"], email.as_str());

    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "email": email, "password": "wrong", "userType": "customer" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: MessageBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.message, "Invalid email or password.");
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_business_login_is_scoped_to_business_accounts() {
    let client = Client::new();
    let base_url = base_url();
    let email = unique_email("business");

    let resp = client
        .post(format!("{base_url}/signup"))
        .json(&json!({
            "email": email,
            "password": "q",
            "businessName": "Tea Co",
            "userType": "business",
        }))
        .send()
        .await
        .expect("Failed to sign up");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "email": email, "password": "q", "userType": "customer" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "email": email, "password": "q", "userType": "business" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: LoginBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.user["businessName"], "Tea Co");
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_invalid_user_type() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/signup", base_url()))
        .json(&json!({ "email": unique_email("admin"), "userType": "admin" }))
        .send()
        .await
        .expect("Failed to sign up");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: MessageBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.message, "Invalid user type.");
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_checkout_appears_in_order_list() {
    let client = Client::new();
    let base_url = base_url();
    let items = vec![LineItem::new("Tea", 3.0, 2)];

    let resp = client
        .post(format!("{base_url}/checkout"))
        .json(&json!({ "cartItems": &items }))
        .send()
        .await
        .expect("Failed to check out");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: CheckoutBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.message, "Order placed successfully.");
    assert_eq!(body.order.items, items);

    let orders: Vec<Order> = client
        .get(format!("{base_url}/orders"))
        .send()
        .await
        .expect("Failed to list orders")
        .json()
        .await
        .expect("Failed to read response");
    assert!(orders.iter().any(|order| order.id == body.order.id));
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_empty_cart_does_not_store_an_order() {
    let client = Client::new();
    let base_url = base_url();

    let before: Vec<Order> = client
        .get(format!("{base_url}/orders"))
        .send()
        .await
        .expect("Failed to list orders")
        .json()
        .await
        .expect("Failed to read response");

    let resp = client
        .post(format!("{base_url}/checkout"))
        .json(&json!({ "cartItems": [] }))
        .send()
        .await
        .expect("Failed to check out");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: MessageBody = resp.json().await.expect("Failed to read response");
    assert_eq!(body.message, "Cart is empty or invalid.");

    let after: Vec<Order> = client
        .get(format!("{base_url}/orders"))
        .send()
        .await
        .expect("Failed to list orders")
        .json()
        .await
        .expect("Failed to read response");
    assert_eq!(after.len(), before.len());
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_health_endpoints() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to call health");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    assert_eq!(resp.text().await.expect("Failed to read response"), "ok");

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to call readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}
