//! # fivesim
//!
//! Typed async client for the [5sim](https://5sim.net) SMS verification API.
//!
//! Every operation maps to exactly one `GET` request; responses are decoded
//! into the types in [`types`] and failures into a [`FiveSimError`] whose
//! [`kind`](FiveSimError::kind) callers can branch on.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fivesim::{BuyActivationOptions, ErrorKind, FiveSimClient, OrderStatus};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FiveSimClient::with_api_key("your_api_key")?;
//!
//!     let order = match client
//!         .buy_activation("russia", "any", "telegram", BuyActivationOptions::default())
//!         .await
//!     {
//!         Ok(order) => order,
//!         Err(e) if e.kind() == ErrorKind::NoNumbers => {
//!             println!("No numbers right now");
//!             return Ok(());
//!         }
//!         Err(e) => return Err(e.into()),
//!     };
//!
//!     // Polling is up to the caller; keep well under the service rate limits.
//!     loop {
//!         let current = client.check_order(order.id).await?;
//!         if let Some(sms) = current.sms.first() {
//!             println!("Got code: {}", sms.code);
//!             client.finish_order(order.id).await?;
//!             break;
//!         }
//!         if current.status.is_terminal() {
//!             break;
//!         }
//!         tokio::time::sleep(Duration::from_secs(3)).await;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)

pub mod client;
pub mod config;
pub mod errors;
pub mod query;
mod response;
pub mod types;

// Re-export commonly used types at the crate root
pub use client::FiveSimClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FiveSimClientBuilder};
pub use errors::{ErrorKind, FiveSimError, Result};
pub use query::{BuyActivationOptions, OrderHistoryQuery, PaymentsQuery, PricesQuery};
pub use types::{
    Category, Countries, Country, DefaultCountry, DefaultOperator, Notification, Order, OrderId,
    OrderStatus, Payment, PaymentsPage, PriceEntry, Prices, Product, Products, Profile, Sms,
    SmsInbox,
};
