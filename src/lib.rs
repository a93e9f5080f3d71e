//! # Sendly - Rust client for the Sendly SMS API
//!
//! This crate provides typed access to the Sendly SMS API: sending,
//! scheduling and batching messages, and managing webhooks, account, credits
//! and API keys. Every call goes through a request executor that applies a
//! client-side rate limit, retries transient failures with exponential
//! backoff (honoring server `Retry-After` hints), and classifies failures
//! into a typed error taxonomy you can branch on.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sendly::{Client, SendMessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendly::Error> {
//!     let client = Client::new(std::env::var("SENDLY_API_KEY").unwrap_or_default())?;
//!
//!     let message = client
//!         .messages()
//!         .send(&SendMessageRequest {
//!             to: "+15551234567".to_owned(),
//!             text: "Hello from the Sendly Rust SDK!".to_owned(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("Message {} is {:?}", message.id, message.status);
//!     println!("Credits used: {}", message.credits_used);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failures carry exactly one [`Error`] variant, and each variant exposes a
//! predicate so callers never have to inspect message text:
//!
//! ```no_run
//! use sendly::{Client, ListMessagesRequest};
//!
//! # async fn example() -> Result<(), sendly::Error> {
//! # let client = Client::new("sk_test")?;
//! match client.messages().list(&ListMessagesRequest::default()).await {
//!     Ok(page) => println!("{} messages", page.count),
//!     Err(err) if err.is_authentication() => eprintln!("check your API key"),
//!     Err(err) if err.is_rate_limit() => {
//!         eprintln!("rate limited, retry in {:?} seconds", err.retry_after());
//!     }
//!     Err(err) if err.is_network() => eprintln!("transport problem: {err}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Validation failures caught locally (an empty `to`, a missing ID) return
//! [`Error::Validation`] without any request being sent.
//!
//! ## Retries, rate limiting, cancellation
//!
//! Authentication, validation, not-found and insufficient-credits responses
//! fail immediately. Rate-limit (429), server (5xx) and network errors are
//! retried up to the configured budget, waiting `Retry-After` when the server
//! provides it and backing off exponentially otherwise. A client-side token
//! bucket (10 requests/second by default) caps the outbound rate across all
//! tasks sharing the client. Set [`ClientBuilder::call_timeout`] to bound a
//! whole call; when the deadline fires mid-wait the call returns
//! [`Error::Cancelled`] immediately.
//!
//! ## Webhooks
//!
//! Inbound deliveries are signed with `X-Sendly-Signature`:
//!
//! ```no_run
//! # fn handle(raw_body: &str, signature_header: &str) -> Result<(), sendly::Error> {
//! let event = sendly::parse_event(raw_body, signature_header, "whsec_...")?;
//! println!("event {:?} for message {}", event.event_type, event.data.message_id);
//! # Ok(())
//! # }
//! ```

mod account;
mod client;
mod error;
mod messages;
mod metadata;
mod rate_limit;
mod retry;
pub mod types;
mod webhooks;

pub use account::{AccountService, ListCreditTransactionsOptions};
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiErrorBody, BoxError, Error, Result};
pub use messages::MessagesService;
pub use types::*;
pub use webhooks::{
    generate_signature, parse_event, verify_signature, WebhookEvent, WebhookEventType,
    WebhookMessageData, WebhookMessageStatus, WebhooksService,
};
