//! 5sim HTTP client.

use crate::config::FiveSimClientBuilder;
use crate::errors::{FiveSimError, Result};
use crate::query::{
    BuyActivationOptions, ForwardingQuery, OrderHistoryQuery, PaymentsQuery, PricesQuery, encode,
};
use crate::response::{classify, parse_json};
use crate::types::{
    Countries, Notification, Order, OrderHistory, OrderId, PaymentsPage, Prices, Products,
    Profile, SmsInbox,
};
use reqwest::header::ACCEPT;
use reqwest_middleware::ClientWithMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::{Span, debug};
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// 5sim HTTP client.
///
/// Every method issues exactly one `GET` request carrying
/// `Authorization: Bearer <api key>` and `Accept: application/json`, and
/// returns the decoded body or a [`FiveSimError`]. Nothing is retried,
/// cached or deduplicated; polling an order is left to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use fivesim::{BuyActivationOptions, FiveSimClient};
///
/// let client = FiveSimClient::with_api_key("your_api_key")?;
///
/// let order = client
///     .buy_activation("russia", "any", "telegram", BuyActivationOptions::default())
///     .await?;
/// println!("Got number: {}", order.phone);
///
/// let order = client.check_order(order.id).await?;
/// if let Some(sms) = order.sms.first() {
///     println!("Got code: {}", sms.code);
///     client.finish_order(order.id).await?;
/// }
/// ```
#[derive(Clone)]
pub struct FiveSimClient {
    http_client: ClientWithMiddleware,
    api_key: SecretString,
    base_url: Url,
    timeout: Duration,
}

impl std::fmt::Debug for FiveSimClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FiveSimClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FiveSimClient {
    /// Create a new client with the default API URL.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a new client against a custom API root.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).base_url(base_url).build()
    }

    /// Create a client configured from the environment.
    ///
    /// See [`FiveSimClientBuilder::from_env`].
    pub fn from_env() -> Result<Self> {
        FiveSimClientBuilder::from_env()?.build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> FiveSimClientBuilder {
        FiveSimClientBuilder::new(api_key)
    }

    pub(crate) fn from_parts(
        http_client: ClientWithMiddleware,
        api_key: SecretString,
        base_url: Url,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            api_key,
            base_url,
            timeout,
        }
    }

    /// API root requests are built against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build request URL from path segments and an optional query string.
    ///
    /// Segments are percent-encoded individually. With no query the `?` is
    /// omitted as well.
    fn build_request_url(&self, segments: &[&str], query: Option<String>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FiveSimError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query.as_deref());
        Ok(url)
    }

    /// Send a GET request and decode the JSON body.
    async fn send_request<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        #[cfg(feature = "tracing")]
        debug!(path = url.path(), query = url.query().unwrap_or_default(), "Sending 5sim request");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.api_key.expose_secret())
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FiveSimError::Network)?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify(status, body));
        }

        parse_json(body)
    }

    // =========================================================================
    // User
    // =========================================================================

    /// Get the account profile.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "FiveSimClient::get_profile", skip_all)
    )]
    pub async fn get_profile(&self) -> Result<Profile> {
        let url = self.build_request_url(&["user", "profile"], None)?;
        let profile: Profile = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(profile)
    }

    /// Get past orders, optionally filtered by category and paged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "FiveSimClient::get_order_history", skip_all)
    )]
    pub async fn get_order_history(&self, query: OrderHistoryQuery) -> Result<Vec<Order>> {
        let url = self.build_request_url(&["user", "orders"], encode(&query)?)?;
        let history: OrderHistory = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(history.into())
    }

    /// Get balance movements, newest first.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "FiveSimClient::get_payments", skip_all)
    )]
    pub async fn get_payments(&self, query: PaymentsQuery) -> Result<PaymentsPage> {
        let url = self.build_request_url(&["user", "payments"], encode(&query)?)?;
        let page = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(page)
    }

    // =========================================================================
    // Guest
    // =========================================================================

    /// Get all countries keyed by name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "FiveSimClient::get_countries", skip_all)
    )]
    pub async fn get_countries(&self) -> Result<Countries> {
        let url = self.build_request_url(&["guest", "countries"], None)?;
        let countries = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(countries)
    }

    /// Get products available for a country and operator.
    ///
    /// # Arguments
    /// * `country` - Country name (e.g. `russia`) or `any`
    /// * `operator` - Operator name (e.g. `beeline`) or `any`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::get_products",
            skip_all,
            fields(country = %country, operator = %operator)
        )
    )]
    pub async fn get_products(&self, country: &str, operator: &str) -> Result<Products> {
        let url = self.build_request_url(&["guest", "products", country, operator], None)?;
        let products = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(products)
    }

    /// Get prices, optionally restricted to a country and/or product.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "FiveSimClient::get_prices", skip_all)
    )]
    pub async fn get_prices(&self, query: PricesQuery) -> Result<Prices> {
        let url = self.build_request_url(&["guest", "prices"], encode(&query)?)?;
        let prices = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(prices)
    }

    /// Get the current service notification in the given language (`en`, `ru`).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::get_notifications",
            skip_all,
            fields(lang = %lang)
        )
    )]
    pub async fn get_notifications(&self, lang: &str) -> Result<Notification> {
        let url = self.build_request_url(&["guest", "notifications", lang], None)?;
        let notification = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(notification)
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Buy an activation number.
    ///
    /// When `options.forwarding` holds a non-empty value the request carries
    /// `forwarding=1`; nothing else about the value is sent.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::buy_activation",
            skip_all,
            fields(
                country = %country,
                operator = %operator,
                product = %product,
                order_id = tracing::field::Empty
            )
        )
    )]
    pub async fn buy_activation(
        &self,
        country: &str,
        operator: &str,
        product: &str,
        options: BuyActivationOptions,
    ) -> Result<Order> {
        let query = if options.forwarding_enabled() {
            encode(&ForwardingQuery::enabled())?
        } else {
            None
        };

        let url = self.build_request_url(
            &["user", "buy", "activation", country, operator, product],
            query,
        )?;
        let order: Order = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        record_order(&order);

        Ok(order)
    }

    /// Buy a hosting number.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::buy_hosting",
            skip_all,
            fields(
                country = %country,
                operator = %operator,
                product = %product,
                order_id = tracing::field::Empty
            )
        )
    )]
    pub async fn buy_hosting(&self, country: &str, operator: &str, product: &str) -> Result<Order> {
        let url = self.build_request_url(
            &["user", "buy", "hosting", country, operator, product],
            None,
        )?;
        let order: Order = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        record_order(&order);

        Ok(order)
    }

    /// Buy a previously used number again.
    ///
    /// # Arguments
    /// * `product` - Product name
    /// * `number` - Phone number without the leading `+`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::reuse_number",
            skip_all,
            fields(product = %product, order_id = tracing::field::Empty)
        )
    )]
    pub async fn reuse_number(&self, product: &str, number: &str) -> Result<Order> {
        let url = self.build_request_url(&["user", "reuse", product, number], None)?;
        let order: Order = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        record_order(&order);

        Ok(order)
    }

    // =========================================================================
    // Order management
    // =========================================================================

    /// Get the current state of an order, including received SMS.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::check_order",
            skip_all,
            fields(order_id = %id, status = tracing::field::Empty)
        )
    )]
    pub async fn check_order(&self, id: OrderId) -> Result<Order> {
        self.order_action("check", id).await
    }

    /// Mark an order as finished.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::finish_order",
            skip_all,
            fields(order_id = %id, status = tracing::field::Empty)
        )
    )]
    pub async fn finish_order(&self, id: OrderId) -> Result<Order> {
        self.order_action("finish", id).await
    }

    /// Cancel an order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::cancel_order",
            skip_all,
            fields(order_id = %id, status = tracing::field::Empty)
        )
    )]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order> {
        self.order_action("cancel", id).await
    }

    /// Report the number of an order as banned by the target service.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::ban_number",
            skip_all,
            fields(order_id = %id, status = tracing::field::Empty)
        )
    )]
    pub async fn ban_number(&self, id: OrderId) -> Result<Order> {
        self.order_action("ban", id).await
    }

    /// Get the SMS inbox of a hosting order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSimClient::get_sms_inbox",
            skip_all,
            fields(order_id = %id)
        )
    )]
    pub async fn get_sms_inbox(&self, id: OrderId) -> Result<SmsInbox> {
        let id = id.to_string();
        let url = self.build_request_url(&["user", "sms", "inbox", &id], None)?;
        let inbox = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        mark_span_ok();

        Ok(inbox)
    }

    async fn order_action(&self, action: &str, id: OrderId) -> Result<Order> {
        let id = id.to_string();
        let url = self.build_request_url(&["user", action, &id], None)?;
        let order: Order = self.send_request(url).await?;

        #[cfg(feature = "tracing")]
        {
            Span::current()
                .record("status", order.status.as_str())
                .set_status(Status::Ok);
        }

        Ok(order)
    }
}

#[cfg(feature = "tracing")]
fn mark_span_ok() {
    Span::current().set_status(Status::Ok);
}

#[cfg(feature = "tracing")]
fn record_order(order: &Order) {
    Span::current()
        .record("order_id", order.id.get())
        .set_status(Status::Ok);
}
