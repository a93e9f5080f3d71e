//! Resource value types for the Sendly API.
//!
//! These are immutable snapshots deserialized from response bodies, plus the
//! request bodies the services serialize. Message-side payloads use camelCase
//! on the wire; account-side payloads use snake_case.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An SMS message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Recipient phone number in E.164 format.
    pub to: String,
    /// Sender ID or phone number.
    pub from: Option<String>,
    /// Message content.
    pub text: String,
    /// Delivery status.
    pub status: MessageStatus,
    /// Message direction (`outbound` or `inbound`).
    pub direction: Option<String>,
    /// Error message if delivery failed.
    pub error: Option<String>,
    /// Number of SMS segments.
    #[serde(default)]
    pub segments: u32,
    /// Credits consumed by this message.
    #[serde(default)]
    pub credits_used: u32,
    /// Whether the message was sent in sandbox mode.
    #[serde(default)]
    pub is_sandbox: bool,
    /// How the message was sent.
    pub sender_type: Option<SenderType>,
    /// Upstream carrier message ID, for tracking.
    pub telnyx_message_id: Option<String>,
    /// Warning (e.g. when `from` was ignored).
    pub warning: Option<String>,
    /// Note about sender behavior.
    pub sender_note: Option<String>,
    /// When the message was created.
    pub created_at: Option<String>,
    /// When the message was delivered, if it was.
    pub delivered_at: Option<String>,
}

/// Delivery status of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Queued for delivery.
    Queued,
    /// Sent to the carrier.
    Sent,
    /// Delivered to the handset.
    Delivered,
    /// Failed to deliver.
    Failed,
}

impl MessageStatus {
    /// The wire value, for query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Queued => "queued",
            MessageStatus::Sent => "sent",
            MessageStatus::Delivered => "delivered",
            MessageStatus::Failed => "failed",
        }
    }
}

/// How a message was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderType {
    /// Sent from the toll-free number pool.
    NumberPool,
    /// Sent with an alphanumeric sender ID.
    Alphanumeric,
    /// Sent in sandbox/test mode.
    Sandbox,
}

/// Message type for compliance handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Promotional content, subject to quiet hours.
    Marketing,
    /// OTPs and confirmations, bypasses quiet hours.
    Transactional,
}

/// Request body for sending a message.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Recipient phone number in E.164 format (required).
    pub to: String,
    /// Message content (required).
    pub text: String,
    /// Compliance type; the API defaults to marketing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
}

/// Filters for listing messages. Unset fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct ListMessagesRequest {
    /// Maximum number of messages to return (API default 20, max 100).
    pub limit: Option<u32>,
    /// Number of messages to skip.
    pub offset: Option<u32>,
    /// Filter by delivery status.
    pub status: Option<MessageStatus>,
    /// Filter by recipient phone number.
    pub to: Option<String>,
}

/// A page of messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    /// The messages in this page.
    pub data: Vec<Message>,
    /// Total number of messages matching the query.
    #[serde(default)]
    pub count: u32,
}

/// A message scheduled for future delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMessage {
    /// Unique scheduled-message identifier.
    pub id: String,
    /// Recipient phone number in E.164 format.
    pub to: String,
    /// Sender ID or phone number.
    pub from: Option<String>,
    /// Message content.
    pub text: String,
    /// When the message is scheduled to be sent (ISO 8601).
    pub scheduled_at: String,
    /// Scheduling status.
    pub status: ScheduledMessageStatus,
    /// Credits reserved for this message.
    #[serde(default)]
    pub credits_reserved: u32,
    /// When the scheduled message was created.
    pub created_at: Option<String>,
    /// When the message was actually sent.
    pub sent_at: Option<String>,
    /// When the message was cancelled.
    pub cancelled_at: Option<String>,
    /// ID of the sent message, once sent.
    pub message_id: Option<String>,
}

/// Status of a scheduled message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledMessageStatus {
    /// Waiting for its send time.
    Scheduled,
    /// Sent.
    Sent,
    /// Cancelled before sending.
    Cancelled,
    /// Failed to send.
    Failed,
}

impl ScheduledMessageStatus {
    /// The wire value, for query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduledMessageStatus::Scheduled => "scheduled",
            ScheduledMessageStatus::Sent => "sent",
            ScheduledMessageStatus::Cancelled => "cancelled",
            ScheduledMessageStatus::Failed => "failed",
        }
    }
}

/// Request body for scheduling a message.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMessageRequest {
    /// Recipient phone number in E.164 format (required).
    pub to: String,
    /// Message content (required).
    pub text: String,
    /// When to send the message, ISO 8601 (required).
    pub scheduled_at: String,
    /// Sender ID or phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Compliance type; the API defaults to marketing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
}

/// Filters for listing scheduled messages.
#[derive(Debug, Clone, Default)]
pub struct ListScheduledMessagesRequest {
    /// Maximum number of messages to return (API default 20, max 100).
    pub limit: Option<u32>,
    /// Number of messages to skip.
    pub offset: Option<u32>,
    /// Filter by scheduling status.
    pub status: Option<ScheduledMessageStatus>,
}

/// A page of scheduled messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListScheduledMessagesResponse {
    /// The scheduled messages in this page.
    pub data: Vec<ScheduledMessage>,
    /// Total number of scheduled messages.
    #[serde(default)]
    pub count: u32,
}

/// Result of cancelling a scheduled message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelScheduledMessageResponse {
    /// The scheduled message ID.
    pub id: String,
    /// The new status (cancelled).
    pub status: ScheduledMessageStatus,
    /// Credits refunded by the cancellation.
    #[serde(default)]
    pub credits_refunded: u32,
}

/// One message within a batch request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchMessageItem {
    /// Recipient phone number in E.164 format (required).
    pub to: String,
    /// Message content (required).
    pub text: String,
}

/// Request body for sending a batch of messages.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBatchRequest {
    /// The messages to send (required, non-empty).
    pub messages: Vec<BatchMessageItem>,
    /// Sender ID applied to every message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Compliance type; the API defaults to marketing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
}

/// Processing status of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Still being processed.
    Processing,
    /// All messages handled.
    Completed,
    /// Some messages failed.
    PartialFailure,
    /// The batch failed.
    Failed,
}

impl BatchStatus {
    /// The wire value, for query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Processing => "processing",
            BatchStatus::Completed => "completed",
            BatchStatus::PartialFailure => "partial_failure",
            BatchStatus::Failed => "failed",
        }
    }
}

/// Per-item outcome within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMessageResult {
    /// Recipient phone number.
    pub to: String,
    /// Message ID if the item was accepted.
    pub message_id: Option<String>,
    /// Item status.
    pub status: String,
    /// Error message if the item failed.
    pub error: Option<String>,
}

/// A batch of messages, with aggregate counters and per-item outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMessageResponse {
    /// Unique batch identifier.
    pub batch_id: String,
    /// Batch status.
    pub status: BatchStatus,
    /// Total number of messages in the batch.
    #[serde(default)]
    pub total: u32,
    /// Messages queued.
    #[serde(default)]
    pub queued: u32,
    /// Messages sent.
    #[serde(default)]
    pub sent: u32,
    /// Messages failed.
    #[serde(default)]
    pub failed: u32,
    /// Total credits used.
    #[serde(default)]
    pub credits_used: u32,
    /// Per-message outcomes, when included.
    #[serde(default)]
    pub messages: Vec<BatchMessageResult>,
    /// When the batch was created.
    pub created_at: Option<String>,
    /// When the batch completed.
    pub completed_at: Option<String>,
}

/// Filters for listing batches.
#[derive(Debug, Clone, Default)]
pub struct ListBatchesRequest {
    /// Maximum number of batches to return (API default 20, max 100).
    pub limit: Option<u32>,
    /// Number of batches to skip.
    pub offset: Option<u32>,
    /// Filter by batch status.
    pub status: Option<BatchStatus>,
}

/// A page of batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBatchesResponse {
    /// The batches in this page.
    pub data: Vec<BatchMessageResponse>,
    /// Total number of batches.
    #[serde(default)]
    pub count: u32,
}

/// Webhook event mode filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookMode {
    /// Both test and live events.
    #[default]
    All,
    /// Only sandbox/test events.
    Test,
    /// Only production events (requires verification).
    Live,
}

/// Circuit-breaker state of a webhook endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitState {
    #[default]
    Closed,
    Open,
    HalfOpen,
}

/// Delivery status of a webhook attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    Failed,
    Cancelled,
}

/// A configured webhook endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Unique webhook identifier (`whk_...`).
    pub id: String,
    /// HTTPS endpoint URL.
    pub url: String,
    /// Subscribed event types.
    pub events: Vec<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Event mode filter.
    #[serde(default)]
    pub mode: WebhookMode,
    /// Whether the webhook is active.
    #[serde(default)]
    pub is_active: bool,
    /// Consecutive delivery failures.
    #[serde(default)]
    pub failure_count: u32,
    /// When the last failure occurred.
    pub last_failure_at: Option<String>,
    /// Circuit-breaker state.
    #[serde(default)]
    pub circuit_state: CircuitState,
    /// When the circuit was opened.
    pub circuit_opened_at: Option<String>,
    /// API version used for payloads.
    #[serde(default)]
    pub api_version: String,
    /// Custom metadata.
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    /// When the webhook was created.
    #[serde(default)]
    pub created_at: String,
    /// When the webhook was last updated.
    #[serde(default)]
    pub updated_at: String,
    /// Total delivery attempts.
    #[serde(default)]
    pub total_deliveries: u32,
    /// Successful deliveries.
    #[serde(default)]
    pub successful_deliveries: u32,
    /// Success rate, 0-100.
    #[serde(default)]
    pub success_rate: f64,
    /// When the last successful delivery occurred.
    pub last_delivery_at: Option<String>,
}

/// Response from creating a webhook. The signing secret is only shown once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookCreatedResponse {
    /// The created webhook.
    #[serde(flatten)]
    pub webhook: Webhook,
    /// The signing secret; store it, it is not retrievable later.
    pub secret: String,
}

/// Request body for creating a webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWebhookRequest {
    /// HTTPS endpoint URL (required).
    pub url: String,
    /// Event types to subscribe to (required, non-empty).
    pub events: Vec<String>,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event mode filter; live mode requires verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WebhookMode>,
    /// Custom metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Request body for updating a webhook; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WebhookMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// One webhook delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDelivery {
    /// Unique delivery identifier (`del_...`).
    pub id: String,
    /// The webhook this delivery belongs to.
    pub webhook_id: String,
    /// Event ID, stable across retries for idempotency.
    pub event_id: String,
    /// Event type.
    pub event_type: String,
    /// Attempt number.
    #[serde(default)]
    pub attempt_number: u32,
    /// Maximum number of attempts.
    #[serde(default)]
    pub max_attempts: u32,
    /// Delivery status.
    pub status: DeliveryStatus,
    /// HTTP status code returned by the endpoint.
    pub response_status_code: Option<u16>,
    /// Endpoint response time in milliseconds.
    pub response_time_ms: Option<u32>,
    /// Error message if the delivery failed.
    pub error_message: Option<String>,
    /// Error code if the delivery failed.
    pub error_code: Option<String>,
    /// When the next retry will occur.
    pub next_retry_at: Option<String>,
    /// When the delivery was created.
    #[serde(default)]
    pub created_at: String,
    /// When the delivery succeeded.
    pub delivered_at: Option<String>,
}

/// Result of test-firing a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookTestResult {
    /// Whether the test delivery succeeded.
    pub success: bool,
    /// HTTP status code returned by the endpoint.
    pub status_code: Option<u16>,
    /// Endpoint response time in milliseconds.
    pub response_time_ms: Option<u32>,
    /// Error message if the test failed.
    pub error: Option<String>,
}

/// Result of rotating a webhook signing secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSecretRotation {
    /// The updated webhook.
    pub webhook: Webhook,
    /// The new signing secret.
    pub new_secret: String,
    /// When the old secret stops being accepted.
    pub old_secret_expires_at: String,
    /// Information about the grace period.
    #[serde(default)]
    pub message: String,
}

/// Account information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// User ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// When the account was created.
    #[serde(default)]
    pub created_at: String,
}

/// Credit balance information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    /// Available credit balance.
    #[serde(default)]
    pub balance: i64,
    /// Credits reserved for scheduled messages.
    #[serde(default)]
    pub reserved_balance: i64,
    /// Total usable credits.
    #[serde(default)]
    pub available_balance: i64,
}

/// A credit transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Purchase,
    Usage,
    Refund,
    Adjustment,
    Bonus,
}

/// A credit transaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditTransaction {
    /// Transaction ID.
    pub id: String,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount; positive for credits in, negative for credits out.
    #[serde(default)]
    pub amount: i64,
    /// Balance after the transaction.
    #[serde(default)]
    pub balance_after: i64,
    /// Transaction description.
    #[serde(default)]
    pub description: String,
    /// Related message ID, for usage transactions.
    pub message_id: Option<String>,
    /// When the transaction occurred.
    #[serde(default)]
    pub created_at: String,
}

/// An API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Key ID.
    pub id: String,
    /// Key name/label.
    pub name: String,
    /// Key type (`test` or `live`).
    #[serde(rename = "type")]
    pub key_type: String,
    /// Key prefix, for identification.
    #[serde(default)]
    pub prefix: String,
    /// Last four characters of the key.
    #[serde(default)]
    pub last_four: String,
    /// Permissions granted to the key.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// When the key was created.
    #[serde(default)]
    pub created_at: String,
    /// When the key was last used.
    pub last_used_at: Option<String>,
    /// When the key expires.
    pub expires_at: Option<String>,
    /// Whether the key has been revoked.
    #[serde(default)]
    pub is_revoked: bool,
}

/// Usage statistics for an API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyUsage {
    /// The key these statistics cover.
    pub key_id: String,
    #[serde(default)]
    pub messages_sent: u32,
    #[serde(default)]
    pub messages_delivered: u32,
    #[serde(default)]
    pub messages_failed: u32,
    #[serde(default)]
    pub credits_used: u32,
    /// Start of the reporting period.
    #[serde(default)]
    pub period_start: String,
    /// End of the reporting period.
    #[serde(default)]
    pub period_end: String,
}

/// Request body for creating an API key.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    /// Key name/label (required).
    pub name: String,
    /// Optional expiry, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Response from creating an API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyResponse {
    /// The created key's metadata.
    pub api_key: ApiKey,
    /// The full key value; shown only once.
    pub key: String,
}
