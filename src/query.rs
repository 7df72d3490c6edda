//! Optional query parameters accepted by list and catalog operations.
//!
//! Unset fields are left out of the query string entirely; fields are
//! serialized in declaration order.

use crate::errors::{FiveSimError, Result};
use crate::types::Category;
use serde::Serialize;

/// Filters for [`FiveSimClient::get_prices`](crate::FiveSimClient::get_prices).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PricesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl PricesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict prices to one country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict prices to one product.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }
}

/// Paging and filtering for
/// [`FiveSimClient::get_order_history`](crate::FiveSimClient::get_order_history).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderHistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl OrderHistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Paging for [`FiveSimClient::get_payments`](crate::FiveSimClient::get_payments).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PaymentsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Options for [`FiveSimClient::buy_activation`](crate::FiveSimClient::buy_activation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyActivationOptions {
    /// Forward received SMS to this number.
    ///
    /// Any non-empty value enables forwarding; the request only carries
    /// `forwarding=1`, the target number comes from the account settings.
    pub forwarding: Option<String>,
}

impl BuyActivationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forwarding(mut self, number: impl Into<String>) -> Self {
        self.forwarding = Some(number.into());
        self
    }

    pub(crate) fn forwarding_enabled(&self) -> bool {
        self.forwarding.as_deref().is_some_and(|f| !f.is_empty())
    }
}

#[derive(Serialize)]
pub(crate) struct ForwardingQuery {
    forwarding: u8,
}

impl ForwardingQuery {
    pub(crate) fn enabled() -> Self {
        Self { forwarding: 1 }
    }
}

/// Encode `params` as a query string, `None` when nothing is set.
pub(crate) fn encode<T: Serialize>(params: &T) -> Result<Option<String>> {
    let query = serde_urlencoded::to_string(params).map_err(FiveSimError::BuildRequestQuery)?;
    Ok((!query.is_empty()).then_some(query))
}
