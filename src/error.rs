//! Error types for Sendly API calls.
//!
//! Every failed call produces exactly one [`Error`] variant. The variant tells
//! you whether the failure came from the API (and which condition), from the
//! network, or from local input validation before any request was sent, so
//! callers can branch without inspecting message text.

use http::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;

/// Boxed error cause carried by wrapping variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for Sendly API calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Error payload returned by the Sendly API on non-2xx responses.
///
/// The wire shape is `{code, message, details?}`. Responses whose body is not
/// valid JSON are preserved with `code = "UNKNOWN_ERROR"` and the raw body as
/// the message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Additional structured details, when the API provides them.
    #[serde(default)]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiErrorBody {
    /// Parses an error response body, falling back to the raw text when the
    /// body is not the documented JSON shape.
    pub(crate) fn from_raw(body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed,
            Err(_) => ApiErrorBody {
                code: "UNKNOWN_ERROR".to_owned(),
                message: body.to_owned(),
                details: None,
            },
        }
    }

    fn local(message: impl Into<String>) -> Self {
        ApiErrorBody {
            code: String::new(),
            message: message.into(),
            details: None,
        }
    }
}

/// The main error type for Sendly API calls.
///
/// Exactly one variant is produced per failed call. HTTP error responses are
/// classified by status code; [`Error::Validation`] is also produced locally
/// for bad input that never reaches the network.
///
/// # Examples
///
/// ```no_run
/// use sendly::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("sk_live_...")?;
///
/// match client.messages().get("msg_123").await {
///     Ok(message) => println!("status: {:?}", message.status),
///     Err(err) if err.is_not_found() => println!("no such message"),
///     Err(err) if err.is_rate_limit() => {
///         println!("slow down, retry after {:?}s", err.retry_after());
///     }
///     Err(err) => return Err(err),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or missing API credentials (HTTP 401).
    #[error("{}", authentication_display(.0))]
    Authentication(ApiErrorBody),

    /// The account has insufficient credits (HTTP 402).
    #[error("{}", insufficient_credits_display(.0))]
    InsufficientCredits(ApiErrorBody),

    /// The requested resource does not exist (HTTP 404).
    #[error("{}", not_found_display(.0))]
    NotFound(ApiErrorBody),

    /// Invalid request parameters (HTTP 400/422), or input rejected locally
    /// before any request was sent.
    ///
    /// Locally produced validation errors carry no API code and may wrap the
    /// underlying cause (e.g. a serialization failure).
    #[error("{}", validation_display(.body, .source))]
    Validation {
        /// The error payload; for local failures only `message` is set.
        body: ApiErrorBody,
        /// The wrapped local cause, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// The rate limit has been exceeded (HTTP 429).
    #[error("{}", rate_limit_display(.body, .retry_after))]
    RateLimit {
        /// The error payload.
        body: ApiErrorBody,
        /// Seconds to wait before retrying, from the `Retry-After` header.
        /// Zero when the header was absent or unparseable.
        retry_after: u64,
    },

    /// Any other non-2xx response; carries the raw status code.
    #[error("{}", api_display(.body, .status))]
    Api {
        /// The error payload.
        body: ApiErrorBody,
        /// The HTTP status code of the response.
        status: StatusCode,
    },

    /// A network-level failure: connect, DNS, per-attempt timeout, body read,
    /// or a response body that could not be deserialized.
    #[error("sendly: network error: {message}")]
    Network {
        /// What the client was doing when the transport failed.
        message: String,
        /// The underlying cause.
        #[source]
        source: Option<BoxError>,
    },

    /// The call's deadline elapsed while waiting on the rate limiter, a
    /// backoff, or the network. Never retried.
    #[error("sendly: request cancelled before completion")]
    Cancelled,

    /// Invalid client configuration (bad base URL, missing API key, etc.).
    #[error("sendly: configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    #[error("sendly: invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

fn authentication_display(body: &ApiErrorBody) -> String {
    format!("sendly: authentication failed: {}", body.message)
}

fn insufficient_credits_display(body: &ApiErrorBody) -> String {
    format!("sendly: insufficient credits: {}", body.message)
}

fn not_found_display(body: &ApiErrorBody) -> String {
    format!("sendly: not found: {}", body.message)
}

fn validation_display(body: &ApiErrorBody, source: &Option<BoxError>) -> String {
    match source {
        Some(cause) => format!("sendly: validation error: {cause}"),
        None => format!("sendly: validation error: {}", body.message),
    }
}

fn rate_limit_display(body: &ApiErrorBody, retry_after: &u64) -> String {
    if *retry_after > 0 {
        format!("sendly: rate limit exceeded, retry after {retry_after} seconds")
    } else {
        format!("sendly: rate limit exceeded: {}", body.message)
    }
}

fn api_display(body: &ApiErrorBody, status: &StatusCode) -> String {
    format!(
        "sendly: {} (code: {}, status: {})",
        body.message,
        body.code,
        status.as_u16()
    )
}

impl Error {
    /// Classifies an HTTP error response into exactly one variant.
    ///
    /// Classification is total: statuses outside the mapped set fall back to
    /// [`Error::Api`] carrying the numeric status.
    pub(crate) fn from_response(status: StatusCode, raw_body: &str, retry_after: u64) -> Self {
        let body = ApiErrorBody::from_raw(raw_body);
        match status {
            StatusCode::UNAUTHORIZED => Error::Authentication(body),
            StatusCode::PAYMENT_REQUIRED => Error::InsufficientCredits(body),
            StatusCode::NOT_FOUND => Error::NotFound(body),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::Validation {
                body,
                source: None,
            },
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit { body, retry_after },
            _ => Error::Api { body, status },
        }
    }

    /// Builds a locally produced validation error; never touches the network.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            body: ApiErrorBody::local(message),
            source: None,
        }
    }

    /// Builds a validation error wrapping a local cause.
    pub(crate) fn validation_with(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Error::Validation {
            body: ApiErrorBody::local(message),
            source: Some(source.into()),
        }
    }

    /// Builds a network error wrapping a transport-level cause.
    pub(crate) fn network(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns `true` if this error is an authentication failure.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error is an insufficient-credits failure.
    pub fn is_insufficient_credits(&self) -> bool {
        matches!(self, Error::InsufficientCredits(_))
    }

    /// Returns `true` if this error is a not-found failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns `true` if this error is a validation failure, whether reported
    /// by the API or caught locally.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns `true` if this error is a rate-limit failure.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Returns `true` if this error is a network-level failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    /// Returns `true` if the call was cancelled by its deadline.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Returns `true` if the executor may retry after this error.
    ///
    /// Rate-limit, generic API, and network errors are transient; everything
    /// else either cannot self-resolve (bad credentials, bad input, missing
    /// resource) or must surface immediately (cancellation).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::RateLimit { .. } | Error::Api { .. } | Error::Network { .. }
        )
    }

    /// Returns the HTTP status code for generic API errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the server's `Retry-After` hint in seconds, for rate-limit
    /// errors only.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimit { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// Returns the API error payload, when this error carries one.
    pub fn api_body(&self) -> Option<&ApiErrorBody> {
        match self {
            Error::Authentication(body)
            | Error::InsufficientCredits(body)
            | Error::NotFound(body) => Some(body),
            Error::Validation { body, .. }
            | Error::RateLimit { body, .. }
            | Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(code: &str, message: &str) -> ApiErrorBody {
        ApiErrorBody {
            code: code.to_owned(),
            message: message.to_owned(),
            details: None,
        }
    }

    #[test]
    fn classification_maps_each_status_to_one_variant() {
        let err = Error::from_response(StatusCode::UNAUTHORIZED, "{}", 0);
        assert!(err.is_authentication());

        let err = Error::from_response(StatusCode::PAYMENT_REQUIRED, "{}", 0);
        assert!(err.is_insufficient_credits());

        let err = Error::from_response(StatusCode::NOT_FOUND, "{}", 0);
        assert!(err.is_not_found());

        let err = Error::from_response(StatusCode::BAD_REQUEST, "{}", 0);
        assert!(err.is_validation());

        let err = Error::from_response(StatusCode::UNPROCESSABLE_ENTITY, "{}", 0);
        assert!(err.is_validation());

        let err = Error::from_response(StatusCode::TOO_MANY_REQUESTS, "{}", 30);
        assert!(err.is_rate_limit());
        assert_eq!(err.retry_after(), Some(30));
    }

    #[test]
    fn unknown_statuses_fall_back_to_generic_api_error() {
        let err = Error::from_response(StatusCode::INTERNAL_SERVER_ERROR, "{}", 0);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.is_retryable());

        let err = Error::from_response(StatusCode::IM_A_TEAPOT, "{}", 0);
        assert_eq!(err.status(), Some(StatusCode::IM_A_TEAPOT));
        assert!(err.is_retryable());
    }

    #[test]
    fn unparseable_body_is_preserved_as_message() {
        let err = Error::from_response(StatusCode::INTERNAL_SERVER_ERROR, "gateway exploded", 0);
        let body = err.api_body().unwrap();
        assert_eq!(body.code, "UNKNOWN_ERROR");
        assert_eq!(body.message, "gateway exploded");
    }

    #[test]
    fn retryable_matches_the_classification_table() {
        assert!(!Error::Authentication(body("", "")).is_retryable());
        assert!(!Error::InsufficientCredits(body("", "")).is_retryable());
        assert!(!Error::NotFound(body("", "")).is_retryable());
        assert!(!Error::validation("to is required").is_retryable());
        assert!(!Error::Cancelled.is_retryable());
        assert!(!Error::Configuration("bad".to_owned()).is_retryable());

        assert!(Error::RateLimit {
            body: body("RATE_LIMIT_EXCEEDED", "slow down"),
            retry_after: 0,
        }
        .is_retryable());
        assert!(Error::Api {
            body: body("SERVER_ERROR", "boom"),
            status: StatusCode::BAD_GATEWAY,
        }
        .is_retryable());
        assert!(
            Error::network("request failed", std::io::Error::other("refused")).is_retryable()
        );
    }

    #[test]
    fn predicates_require_an_exact_variant_match() {
        let auth = Error::Authentication(body("UNAUTHORIZED", "bad key"));
        assert!(auth.is_authentication());
        assert!(!auth.is_validation());
        assert!(!auth.is_rate_limit());
        assert!(!auth.is_network());
        assert!(!auth.is_not_found());
        assert!(!auth.is_insufficient_credits());
        assert!(!auth.is_cancelled());

        let network = Error::network("request failed", std::io::Error::other("reset"));
        assert!(network.is_network());
        assert!(!network.is_cancelled());
        assert!(!Error::Cancelled.is_network());
    }

    #[test]
    fn display_messages_are_stable_and_prefixed() {
        let err = Error::Authentication(body("UNAUTHORIZED", "Invalid API key"));
        assert_eq!(
            err.to_string(),
            "sendly: authentication failed: Invalid API key"
        );

        let err = Error::InsufficientCredits(body("INSUFFICIENT_CREDITS", "Not enough credits"));
        assert_eq!(
            err.to_string(),
            "sendly: insufficient credits: Not enough credits"
        );

        let err = Error::NotFound(body("NOT_FOUND", "No such message"));
        assert_eq!(err.to_string(), "sendly: not found: No such message");

        let err = Error::Api {
            body: body("TEST_ERROR", "Test error message"),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "sendly: Test error message (code: TEST_ERROR, status: 500)"
        );
    }

    #[test]
    fn rate_limit_display_prefers_the_retry_hint() {
        let err = Error::RateLimit {
            body: body("RATE_LIMIT_EXCEEDED", "Too many requests"),
            retry_after: 60,
        };
        assert_eq!(
            err.to_string(),
            "sendly: rate limit exceeded, retry after 60 seconds"
        );

        let err = Error::RateLimit {
            body: body("RATE_LIMIT_EXCEEDED", "Too many requests"),
            retry_after: 0,
        };
        assert_eq!(
            err.to_string(),
            "sendly: rate limit exceeded: Too many requests"
        );
    }

    #[test]
    fn validation_display_prefers_the_wrapped_cause() {
        let err = Error::validation_with("bad input", std::io::Error::other("underlying error"));
        assert_eq!(err.to_string(), "sendly: validation error: underlying error");

        let err = Error::validation("Invalid input");
        assert_eq!(err.to_string(), "sendly: validation error: Invalid input");
    }
}
