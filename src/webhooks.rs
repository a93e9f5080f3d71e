//! Webhook management and inbound event verification.
//!
//! The [`WebhooksService`] manages webhook endpoints through the API. The
//! free functions at the bottom handle the inbound side: verifying the
//! `X-Sendly-Signature` header on a delivery and parsing its payload.

use crate::{
    client::Client,
    error::{Error, Result},
    metadata::RequestMetadata,
    types::{
        CreateWebhookRequest, UpdateWebhookRequest, Webhook, WebhookCreatedResponse,
        WebhookDelivery, WebhookSecretRotation, WebhookTestResult,
    },
};
use hmac::{Hmac, Mac};
use http::Method;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Webhook-related API operations.
///
/// Obtained from [`Client::webhooks`].
#[derive(Clone)]
pub struct WebhooksService {
    client: Client,
}

impl WebhooksService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a webhook endpoint.
    ///
    /// The response carries the signing secret; it is only shown once.
    pub async fn create(&self, request: &CreateWebhookRequest) -> Result<WebhookCreatedResponse> {
        if request.url.is_empty() {
            return Err(Error::validation("url is required"));
        }
        if request.events.is_empty() {
            return Err(Error::validation("events are required"));
        }

        let meta = RequestMetadata::new(Method::POST, "/webhooks");
        self.client.request(meta, Some(request)).await
    }

    /// Lists all webhook endpoints.
    pub async fn list(&self) -> Result<Vec<Webhook>> {
        let meta = RequestMetadata::new(Method::GET, "/webhooks");
        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves a webhook by ID.
    pub async fn get(&self, id: impl AsRef<str>) -> Result<Webhook> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("webhook ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/webhooks").segment(id);
        self.client.request(meta, None::<&()>).await
    }

    /// Updates a webhook; unset request fields are left unchanged.
    pub async fn update(
        &self,
        id: impl AsRef<str>,
        request: &UpdateWebhookRequest,
    ) -> Result<Webhook> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("webhook ID is required"));
        }

        let meta = RequestMetadata::new(Method::PATCH, "/webhooks").segment(id);
        self.client.request(meta, Some(request)).await
    }

    /// Deletes a webhook.
    pub async fn delete(&self, id: impl AsRef<str>) -> Result<()> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("webhook ID is required"));
        }

        let meta = RequestMetadata::new(Method::DELETE, "/webhooks").segment(id);
        self.client.request_empty(meta, None::<&()>).await
    }

    /// Sends a test event to a webhook endpoint.
    pub async fn test(&self, id: impl AsRef<str>) -> Result<WebhookTestResult> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("webhook ID is required"));
        }

        let meta = RequestMetadata::new(Method::POST, "/webhooks")
            .segment(id)
            .segment("test");
        self.client.request(meta, None::<&()>).await
    }

    /// Rotates a webhook's signing secret.
    ///
    /// The old secret keeps verifying deliveries until the grace period in
    /// the response expires.
    pub async fn rotate_secret(&self, id: impl AsRef<str>) -> Result<WebhookSecretRotation> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("webhook ID is required"));
        }

        let meta = RequestMetadata::new(Method::POST, "/webhooks")
            .segment(id)
            .segment("rotate-secret");
        self.client.request(meta, None::<&()>).await
    }

    /// Lists recent delivery attempts for a webhook.
    pub async fn deliveries(&self, id: impl AsRef<str>) -> Result<Vec<WebhookDelivery>> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("webhook ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/webhooks")
            .segment(id)
            .segment("deliveries");
        self.client.request(meta, None::<&()>).await
    }
}

/// Type of an inbound webhook event.
///
/// Event types this version of the client does not know about deserialize to
/// [`WebhookEventType::Unknown`] rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum WebhookEventType {
    #[serde(rename = "message.queued")]
    MessageQueued,
    #[serde(rename = "message.sent")]
    MessageSent,
    #[serde(rename = "message.delivered")]
    MessageDelivered,
    #[serde(rename = "message.failed")]
    MessageFailed,
    #[serde(rename = "message.undelivered")]
    MessageUndelivered,
    /// An event type this version of the client does not know about.
    #[serde(rename = "unknown")]
    Unknown,
}

impl From<String> for WebhookEventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "message.queued" => WebhookEventType::MessageQueued,
            "message.sent" => WebhookEventType::MessageSent,
            "message.delivered" => WebhookEventType::MessageDelivered,
            "message.failed" => WebhookEventType::MessageFailed,
            "message.undelivered" => WebhookEventType::MessageUndelivered,
            _ => WebhookEventType::Unknown,
        }
    }
}

/// Message status carried in webhook events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookMessageStatus {
    Queued,
    Sent,
    Delivered,
    Failed,
    Undelivered,
}

/// Data payload of a message webhook event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessageData {
    /// The message this event is about.
    pub message_id: String,
    /// Message status after the event.
    pub status: WebhookMessageStatus,
    /// Recipient phone number.
    pub to: String,
    /// Sender ID or phone number.
    #[serde(default)]
    pub from: String,
    /// Error message, for failure events.
    #[serde(default)]
    pub error: String,
    /// Error code, for failure events.
    #[serde(default)]
    pub error_code: String,
    /// When the message was delivered.
    #[serde(default)]
    pub delivered_at: String,
    /// When the message failed.
    #[serde(default)]
    pub failed_at: String,
    /// Number of SMS segments.
    #[serde(default)]
    pub segments: u32,
    /// Credits consumed.
    #[serde(default)]
    pub credits_used: u32,
}

/// An inbound webhook event from Sendly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event ID, stable across redeliveries.
    pub id: String,
    /// Event type.
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    /// Event payload.
    pub data: WebhookMessageData,
    /// When the event was created.
    pub created_at: String,
    /// API version of the payload shape.
    #[serde(default)]
    pub api_version: String,
}

/// Verifies the `X-Sendly-Signature` header of a webhook delivery.
///
/// The signature format is `sha256=<hex HMAC-SHA256 of the raw body>`. The
/// comparison is constant-time; any empty input fails verification.
///
/// # Examples
///
/// ```
/// let payload = r#"{"id":"evt_1"}"#;
/// let signature = sendly::generate_signature(payload, "whsec_test");
/// assert!(sendly::verify_signature(payload, &signature, "whsec_test"));
/// assert!(!sendly::verify_signature(payload, &signature, "wrong_secret"));
/// ```
pub fn verify_signature(payload: &str, signature: &str, secret: &str) -> bool {
    if payload.is_empty() || signature.is_empty() || secret.is_empty() {
        return false;
    }
    let Some(hex_digest) = signature.strip_prefix("sha256=") else {
        return false;
    };
    let Ok(claimed) = hex::decode(hex_digest) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload.as_bytes());
    mac.verify_slice(&claimed).is_ok()
}

/// Verifies and parses a webhook event payload.
///
/// Returns [`Error::Validation`] when the signature does not match, the
/// payload is not valid JSON, or the event is structurally incomplete.
pub fn parse_event(payload: &str, signature: &str, secret: &str) -> Result<WebhookEvent> {
    if !verify_signature(payload, signature, secret) {
        return Err(Error::validation("invalid webhook signature"));
    }

    let event: WebhookEvent = serde_json::from_str(payload)
        .map_err(|err| Error::validation_with("failed to parse webhook payload", err))?;

    if event.id.is_empty() || event.created_at.is_empty() {
        return Err(Error::validation("invalid event structure"));
    }

    Ok(event)
}

/// Computes the `sha256=...` signature for a payload.
///
/// Intended for tests and for signing simulated deliveries.
pub fn generate_signature(payload: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}
