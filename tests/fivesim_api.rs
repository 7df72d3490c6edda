//! Integration tests against the live 5sim API.
//!
//! These tests make real API calls and require a valid API key.
//! They are ignored by default and should be run manually.
//!
//! # Setup
//!
//! 1. Create `tests/.env` containing `FIVESIM_API_KEY=your_key`
//!
//! 2. Run the tests:
//!    ```bash
//!    cargo test --test fivesim_api -- --ignored
//!    ```
//!
//! Alternatively, pass the API key directly:
//! ```bash
//! FIVESIM_API_KEY=your_key cargo test --test fivesim_api -- --ignored
//! ```
//!
//! **WARNING**: Tests that buy numbers will consume balance!

use fivesim::{
    BuyActivationOptions, ErrorKind, FiveSimClient, FiveSimError, OrderHistoryQuery, OrderStatus,
    PricesQuery,
};
use std::env;

const TEST_COUNTRY: &str = "russia";
const TEST_OPERATOR: &str = "any";
const TEST_PRODUCT: &str = "telegram";

/// Get API key from environment or .env file.
fn get_api_key() -> String {
    dotenvy::from_filename("tests/.env").ok();
    dotenvy::dotenv().ok();

    env::var("FIVESIM_API_KEY").expect(
        "FIVESIM_API_KEY environment variable must be set.\n\
         Either:\n\
         1. Put FIVESIM_API_KEY=your_key into tests/.env\n\
         2. Run with: FIVESIM_API_KEY=your_key cargo test --test fivesim_api -- --ignored",
    )
}

/// Create a test client with the API key from environment.
fn create_client() -> FiveSimClient {
    FiveSimClient::with_api_key(get_api_key()).expect("Failed to create client")
}

fn is_no_numbers_error(err: &FiveSimError) -> bool {
    err.kind() == ErrorKind::NoNumbers
}

// =============================================================================
// Guest Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires network access"]
async fn test_get_countries() {
    let client = FiveSimClient::with_api_key("unused").unwrap();

    let countries = client.get_countries().await.expect("countries");
    assert!(countries.contains_key(TEST_COUNTRY));
    println!("Got {} countries", countries.len());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_get_products_and_prices() {
    let client = FiveSimClient::with_api_key("unused").unwrap();

    let products = client
        .get_products(TEST_COUNTRY, TEST_OPERATOR)
        .await
        .expect("products");
    println!("Got {} products for {}", products.len(), TEST_COUNTRY);

    let prices = client
        .get_prices(
            PricesQuery::new()
                .with_country(TEST_COUNTRY)
                .with_product(TEST_PRODUCT),
        )
        .await
        .expect("prices");
    for (operator, entry) in &prices[TEST_COUNTRY][TEST_PRODUCT] {
        println!("  {}: cost={} count={}", operator, entry.cost, entry.count);
    }
}

// =============================================================================
// User Tests
// =============================================================================

#[tokio::test]
#[ignore = "requires API key"]
async fn test_get_profile() {
    let client = create_client();

    let profile = client.get_profile().await.expect("profile");
    println!("Profile {} balance={}", profile.email, profile.balance);
}

#[tokio::test]
#[ignore = "requires API key"]
async fn test_get_order_history() {
    let client = create_client();

    let orders = client
        .get_order_history(OrderHistoryQuery::new().with_limit(5))
        .await
        .expect("orders");
    assert!(orders.len() <= 5);
}

/// Test error handling for invalid API key.
#[tokio::test]
#[ignore = "requires network access"]
async fn test_invalid_api_key() {
    let client = FiveSimClient::with_api_key("invalid_key_12345").unwrap();

    let err = client.get_profile().await.unwrap_err();
    println!("Error with invalid API key: {:?}", err);
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status(), Some(401));
}

// =============================================================================
// Order Lifecycle Tests
// =============================================================================

/// Buy an activation, check it, and cancel it right away.
#[tokio::test]
#[ignore = "requires API key and consumes balance"]
async fn test_buy_check_cancel() {
    let client = create_client();

    let result = client
        .buy_activation(
            TEST_COUNTRY,
            TEST_OPERATOR,
            TEST_PRODUCT,
            BuyActivationOptions::default(),
        )
        .await;

    match result {
        Ok(order) => {
            println!("Bought {} (order {})", order.phone, order.id);
            assert_eq!(order.status, OrderStatus::Pending);

            let checked = client.check_order(order.id).await.expect("check");
            assert_eq!(checked.id, order.id);

            let canceled = client.cancel_order(order.id).await.expect("cancel");
            assert_eq!(canceled.status, OrderStatus::Canceled);
        }
        Err(ref e) if is_no_numbers_error(e) => {
            println!("No numbers available (this is expected sometimes)");
        }
        Err(e) => {
            panic!("Unexpected error: {:?}", e);
        }
    }
}
