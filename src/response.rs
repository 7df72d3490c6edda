//! Response mapping for the 5sim API.

use crate::errors::{FiveSimError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Map a non-success HTTP response to a [`FiveSimError`].
///
/// 401, 429 and 503 map unconditionally. A 400 is reported as
/// [`FiveSimError::NoNumbers`] when its message or raw body contains "no"
/// or "not available" (case-insensitive); 5sim has no dedicated error code for
/// this, so the match is on wording only. Everything else is
/// [`FiveSimError::Api`].
pub(crate) fn classify(status: StatusCode, body: String) -> FiveSimError {
    let code = status.as_u16();

    let error = match status {
        StatusCode::UNAUTHORIZED => FiveSimError::Authentication { status: code, body },
        StatusCode::TOO_MANY_REQUESTS => FiveSimError::RateLimit { status: code, body },
        StatusCode::SERVICE_UNAVAILABLE => FiveSimError::ServiceUnavailable { status: code, body },
        StatusCode::BAD_REQUEST => {
            let message = error_message(&body);
            if looks_like_no_numbers(&message) || looks_like_no_numbers(&body) {
                FiveSimError::NoNumbers {
                    status: code,
                    body,
                    message,
                }
            } else {
                FiveSimError::Api { status: code, body }
            }
        }
        _ => FiveSimError::Api { status: code, body },
    };

    #[cfg(feature = "tracing")]
    warn!(
        kind = %error.kind(),
        status = code,
        body = error.body().unwrap_or_default(),
        "5sim service returned error"
    );

    error
}

/// Deserialize a success body.
pub(crate) fn parse_json<T: DeserializeOwned>(body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|source| FiveSimError::DeserializeJson { source, body })
}

/// Extract the human-readable message from an error body.
///
/// Uses the `message` field of a JSON object body when present, otherwise the
/// trimmed body text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn looks_like_no_numbers(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("no") || lower.contains("not available")
}
