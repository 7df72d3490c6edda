//! Error types for 5sim client operations.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Fieldless discriminant of [`FiveSimError`].
///
/// Callers branch on this instead of inspecting status codes:
///
/// ```rust
/// use fivesim::{ErrorKind, FiveSimError};
///
/// fn should_back_off(err: &FiveSimError) -> bool {
///     matches!(
///         err.kind(),
///         ErrorKind::RateLimit | ErrorKind::ServiceUnavailable | ErrorKind::Network
///     )
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-2xx response not matching a more specific kind.
    Api,
    /// HTTP 401.
    Authentication,
    /// HTTP 429.
    RateLimit,
    /// HTTP 503.
    ServiceUnavailable,
    /// HTTP 400 whose message reads like "no numbers available".
    NoNumbers,
    /// No HTTP response was received, or the body could not be read.
    Network,
    /// A 2xx body did not match the expected JSON shape.
    Decode,
    /// The client could not be constructed.
    Config,
}

impl ErrorKind {
    /// Returns the kind name in snake case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Authentication => "authentication",
            Self::RateLimit => "rate_limit",
            Self::ServiceUnavailable => "service_unavailable",
            Self::NoNumbers => "no_numbers",
            Self::Network => "network",
            Self::Decode => "decode",
            Self::Config => "config",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for 5sim client operations.
#[derive(Debug, Error)]
pub enum FiveSimError {
    /// Generic service error.
    #[error("5sim API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Invalid or missing API key.
    #[error("5sim rejected the API key (HTTP {status})")]
    Authentication { status: u16, body: String },

    /// Too many requests.
    #[error("5sim rate limit exceeded (HTTP {status})")]
    RateLimit { status: u16, body: String },

    /// The service is temporarily down.
    #[error("5sim service unavailable (HTTP {status})")]
    ServiceUnavailable { status: u16, body: String },

    /// No numbers available for the requested country/operator/product.
    #[error("No numbers available: {message}")]
    NoNumbers {
        status: u16,
        body: String,
        /// Message text the classification was based on.
        message: String,
    },

    /// Failed to send the request or read the response.
    #[error("Failed to send HTTP request: {0}")]
    Network(#[source] reqwest_middleware::Error),

    /// Failed to deserialize JSON response.
    #[error("Failed to deserialize JSON response: {source}")]
    DeserializeJson {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The configured base URL is not usable.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A required configuration value is missing.
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    /// A configuration value could not be parsed.
    #[error("Invalid value '{value}' for {name}")]
    InvalidConfig { name: &'static str, value: String },

    /// Error building the request query string.
    #[error("Error building request query: {0}")]
    BuildRequestQuery(#[source] serde_urlencoded::ser::Error),
}

pub type Result<T> = std::result::Result<T, FiveSimError>;

impl FiveSimError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { .. } => ErrorKind::Api,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
            Self::NoNumbers { .. } => ErrorKind::NoNumbers,
            Self::Network(_) => ErrorKind::Network,
            Self::DeserializeJson { .. } => ErrorKind::Decode,
            Self::BuildHttpClient(_)
            | Self::InvalidBaseUrl { .. }
            | Self::MissingConfig(_)
            | Self::InvalidConfig { .. }
            | Self::BuildRequestQuery(_) => ErrorKind::Config,
        }
    }

    /// HTTP status code of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. }
            | Self::Authentication { status, .. }
            | Self::RateLimit { status, .. }
            | Self::ServiceUnavailable { status, .. }
            | Self::NoNumbers { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, if a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. }
            | Self::Authentication { body, .. }
            | Self::RateLimit { body, .. }
            | Self::ServiceUnavailable { body, .. }
            | Self::NoNumbers { body, .. }
            | Self::DeserializeJson { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FiveSimError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(reqwest_middleware::Error::Reqwest(error))
    }
}

impl From<reqwest_middleware::Error> for FiveSimError {
    fn from(error: reqwest_middleware::Error) -> Self {
        Self::Network(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_status_errors() {
        let cases = vec![
            (
                FiveSimError::Api {
                    status: 500,
                    body: "oops".into(),
                },
                ErrorKind::Api,
            ),
            (
                FiveSimError::Authentication {
                    status: 401,
                    body: String::new(),
                },
                ErrorKind::Authentication,
            ),
            (
                FiveSimError::RateLimit {
                    status: 429,
                    body: String::new(),
                },
                ErrorKind::RateLimit,
            ),
            (
                FiveSimError::ServiceUnavailable {
                    status: 503,
                    body: String::new(),
                },
                ErrorKind::ServiceUnavailable,
            ),
            (
                FiveSimError::NoNumbers {
                    status: 400,
                    body: "no free phones".into(),
                    message: "no free phones".into(),
                },
                ErrorKind::NoNumbers,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.kind(), expected);
            assert!(error.status().is_some());
            assert!(error.body().is_some());
        }
    }

    #[test]
    fn test_config_errors_carry_no_status() {
        let error = FiveSimError::MissingConfig("FIVESIM_API_KEY");
        assert_eq!(error.kind(), ErrorKind::Config);
        assert_eq!(error.status(), None);
        assert_eq!(error.body(), None);
    }

    #[test]
    fn test_api_error_display() {
        let error = FiveSimError::Api {
            status: 418,
            body: "teapot".into(),
        };
        assert_eq!(error.to_string(), "5sim API error (HTTP 418): teapot");
        assert_eq!(error.status(), Some(418));
        assert_eq!(error.body(), Some("teapot"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::RateLimit.to_string(), "rate_limit");
        assert_eq!(ErrorKind::NoNumbers.as_str(), "no_numbers");
    }
}
