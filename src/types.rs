//! Types for 5sim API requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

// =============================================================================
// OrderId
// =============================================================================

/// Identifier of a purchased number (order).
///
/// Returned by the buy operations and used for every follow-up lifecycle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create a new OrderId.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Status of an order as reported by 5sim.
///
/// Transitions are driven by the service: `PENDING -> RECEIVED -> FINISHED`,
/// `PENDING -> CANCELED`, `PENDING/RECEIVED -> TIMEOUT`, and any state may
/// become `BANNED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Number issued, waiting for SMS.
    Pending,
    /// At least one SMS received.
    Received,
    /// Order canceled.
    Canceled,
    /// Order expired.
    Timeout,
    /// Order completed.
    Finished,
    /// Number banned.
    Banned,
}

impl OrderStatus {
    /// Returns the status as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Received => "RECEIVED",
            Self::Canceled => "CANCELED",
            Self::Timeout => "TIMEOUT",
            Self::Finished => "FINISHED",
            Self::Banned => "BANNED",
        }
    }

    /// Returns true once the service will not change this order any more.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Received)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Short rental for receiving one verification SMS.
    Activation,
    /// Long-term rental.
    Hosting,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activation => "activation",
            Self::Hosting => "hosting",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Account profile returned by `/user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub vendor: String,
    /// Number SMS are forwarded to by default.
    #[serde(default)]
    pub default_forwarding_number: String,
    pub balance: f64,
    pub rating: f64,
    pub default_country: DefaultCountry,
    pub default_operator: DefaultOperator,
    #[serde(default)]
    pub frozen_balance: f64,
}

/// Default country settings of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCountry {
    pub name: String,
    pub iso: String,
    pub prefix: String,
}

/// Default operator settings of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultOperator {
    pub name: String,
}

// =============================================================================
// Catalog
// =============================================================================

/// Country entry of `/guest/countries`, keyed by country name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO codes (e.g. `{"ru": 1}`).
    #[serde(default)]
    pub iso: BTreeMap<String, i64>,
    /// Dialing prefixes (e.g. `{"+7": 1}`).
    #[serde(default)]
    pub prefix: BTreeMap<String, i64>,
    /// English display name.
    #[serde(default)]
    pub text_en: String,
    /// Russian display name.
    #[serde(default)]
    pub text_ru: String,
    /// Remaining per-country flags (virtual operator availability etc.).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Product entry of `/guest/products/{country}/{operator}`, keyed by product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Category")]
    pub category: Category,
    /// Numbers currently available.
    #[serde(rename = "Qty")]
    pub qty: u64,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// Price of a product at one operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub cost: f64,
    /// Numbers currently available.
    pub count: u64,
    /// Overall delivery success rate, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate24: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate72: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate168: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate720: Option<f64>,
}

/// Countries keyed by name.
pub type Countries = BTreeMap<String, Country>;

/// Products keyed by name.
pub type Products = BTreeMap<String, Product>;

/// Prices keyed by country, then product, then operator.
pub type Prices = BTreeMap<String, BTreeMap<String, BTreeMap<String, PriceEntry>>>;

// =============================================================================
// Orders
// =============================================================================

/// A purchased number together with the SMS received so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub phone: String,
    #[serde(default)]
    pub operator: String,
    pub product: String,
    pub price: f64,
    pub status: OrderStatus,
    /// Expiry timestamp (RFC 3339).
    #[serde(default)]
    pub expires: String,
    /// SMS received for this order; the service sends `null` before the first one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sms: Vec<Sms>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub forwarding: Option<bool>,
    #[serde(default)]
    pub forwarding_number: Option<String>,
    #[serde(default)]
    pub country: String,
}

/// A received SMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sms {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub sender: String,
    pub text: String,
    /// Verification code as extracted by the service.
    #[serde(default)]
    pub code: String,
}

/// `/user/orders` is served either as a bare list or as a page object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OrderHistory {
    List(Vec<Order>),
    Page {
        #[serde(rename = "Data", deserialize_with = "null_as_default")]
        data: Vec<Order>,
    },
}

impl From<OrderHistory> for Vec<Order> {
    fn from(history: OrderHistory) -> Self {
        match history {
            OrderHistory::List(orders) => orders,
            OrderHistory::Page { data } => data,
        }
    }
}

// =============================================================================
// Miscellaneous
// =============================================================================

/// Service notification returned by `/guest/notifications/{lang}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
}

/// SMS inbox of a hosting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsInbox {
    #[serde(rename = "Data", deserialize_with = "null_as_default")]
    pub data: Vec<Sms>,
    #[serde(rename = "Total", default)]
    pub total: u64,
}

/// Balance movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "TypeName")]
    pub type_name: String,
    #[serde(rename = "ProviderName")]
    pub provider_name: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
}

/// Page of `/user/payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsPage {
    #[serde(rename = "Data", deserialize_with = "null_as_default")]
    pub data: Vec<Payment>,
    #[serde(rename = "Total", default)]
    pub total: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
