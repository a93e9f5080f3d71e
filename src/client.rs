//! The Sendly API client and its request executor.
//!
//! [`Client`] is the entry point: configure one with [`ClientBuilder`], then
//! reach the typed services through [`Client::messages`], [`Client::account`]
//! and [`Client::webhooks`]. The executor in this module turns each service
//! call into HTTP attempts: it takes a rate-limiter permit, sends the request,
//! classifies failures, and retries transient ones with exponential backoff
//! while honoring server `Retry-After` hints.

use crate::{
    account::AccountService,
    error::{Error, Result},
    messages::MessagesService,
    metadata::RequestMetadata,
    rate_limit::{self, RateLimiter},
    retry::{backoff_delay, RetryState},
    webhooks::WebhooksService,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The production Sendly API base URL.
pub const DEFAULT_BASE_URL: &str = "https://sendly.live/api/v1";

/// Default per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RATE_PER_SEC: f64 = 10.0;
const DEFAULT_BURST: u32 = 10;
const USER_AGENT: &str = concat!("sendly-rust/", env!("CARGO_PKG_VERSION"));

/// The Sendly API client.
///
/// The client is cheap to clone and safe to share across tasks; all clones
/// use the same connection pool and the same rate limiter. Configuration is
/// immutable after construction.
///
/// # Examples
///
/// ```no_run
/// use sendly::{Client, SendMessageRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), sendly::Error> {
///     let client = Client::new(std::env::var("SENDLY_API_KEY").unwrap_or_default())?;
///
///     let message = client
///         .messages()
///         .send(&SendMessageRequest {
///             to: "+15551234567".to_owned(),
///             text: "Hello from Rust!".to_owned(),
///             ..Default::default()
///         })
///         .await?;
///
///     println!("sent {} ({:?})", message.id, message.status);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    timeout: Duration,
    max_retries: u32,
    call_timeout: Option<Duration>,
    debug: bool,
    rate_limiter: RateLimiter,
}

impl Client {
    /// Creates a client with default configuration.
    ///
    /// Use [`Client::builder`] to customize the base URL, timeouts, retry
    /// budget, or transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Starts building a client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Message operations: send, schedule, batch, list, cancel.
    pub fn messages(&self) -> MessagesService {
        MessagesService::new(self.clone())
    }

    /// Account operations: account info, credits, API keys.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.clone())
    }

    /// Webhook management operations.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.clone())
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// The configured per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// The configured maximum number of retries.
    pub fn max_retries(&self) -> u32 {
        self.inner.max_retries
    }

    /// The configured whole-call deadline, if any.
    pub fn call_timeout(&self) -> Option<Duration> {
        self.inner.call_timeout
    }

    /// Whether debug logging of request/response bodies is enabled.
    pub fn debug(&self) -> bool {
        self.inner.debug
    }

    /// Executes one logical call and deserializes the response body.
    ///
    /// A success body that fails to decode counts as a transport fault and is
    /// retried like one.
    pub(crate) async fn request<Req, Res>(
        &self,
        meta: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Res>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let payload = encode_body(body)?;
        self.execute(&meta, payload, |raw| {
            serde_json::from_str(&raw)
                .map_err(|err| Error::network("failed to deserialize response body", err))
        })
        .await
    }

    /// Executes one logical call whose success response has no body.
    pub(crate) async fn request_empty<Req>(
        &self,
        meta: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<()>
    where
        Req: Serialize,
    {
        let payload = encode_body(body)?;
        self.execute(&meta, payload, |_| Ok(())).await
    }

    async fn execute<T, D>(
        &self,
        meta: &RequestMetadata,
        payload: Option<serde_json::Value>,
        decode: D,
    ) -> Result<T>
    where
        D: Fn(String) -> Result<T>,
    {
        match self.inner.call_timeout {
            Some(deadline) => {
                match tokio::time::timeout(deadline, self.run(meta, payload.as_ref(), &decode))
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        tracing::warn!(
                            method = %meta.method,
                            path = %meta.path(),
                            deadline_ms = deadline.as_millis() as u64,
                            "call deadline elapsed"
                        );
                        Err(Error::Cancelled)
                    }
                }
            }
            None => self.run(meta, payload.as_ref(), &decode).await,
        }
    }

    /// Drives the retry state machine for one logical call.
    async fn run<T, D>(
        &self,
        meta: &RequestMetadata,
        payload: Option<&serde_json::Value>,
        decode: &D,
    ) -> Result<T>
    where
        D: Fn(String) -> Result<T>,
    {
        self.inner.rate_limiter.acquire().await;

        let mut state = RetryState::Attempting { number: 0 };
        loop {
            state = match state {
                RetryState::Attempting { number } => {
                    match self
                        .attempt(meta, payload, number)
                        .await
                        .and_then(|raw| decode(raw))
                    {
                        Ok(value) => return Ok(value),
                        Err(err) if !err.is_retryable() => RetryState::Done(err),
                        Err(err) => {
                            tracing::warn!(
                                error = %err,
                                attempt = number,
                                method = %meta.method,
                                path = %meta.path(),
                                "request attempt failed"
                            );
                            if number >= self.inner.max_retries {
                                RetryState::Done(err)
                            } else {
                                match err.retry_after().filter(|secs| *secs > 0) {
                                    Some(secs) => RetryState::RateLimitWait {
                                        next: number + 1,
                                        hint: Duration::from_secs(secs),
                                    },
                                    None => RetryState::Backoff { next: number + 1 },
                                }
                            }
                        }
                    }
                }
                RetryState::RateLimitWait { next, hint } => {
                    tracing::info!(
                        wait_secs = hint.as_secs(),
                        "rate limited, honoring Retry-After before retrying"
                    );
                    tokio::time::sleep(hint).await;
                    RetryState::Backoff { next }
                }
                RetryState::Backoff { next } => {
                    let delay = backoff_delay(next);
                    tracing::debug!(
                        delay_ms = delay.as_millis() as u64,
                        attempt = next,
                        "backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                    RetryState::Attempting { number: next }
                }
                RetryState::Done(err) => return Err(err),
            };
        }
    }

    /// Performs a single HTTP attempt and classifies the outcome.
    async fn attempt(
        &self,
        meta: &RequestMetadata,
        payload: Option<&serde_json::Value>,
        number: u32,
    ) -> Result<String> {
        let url = self.endpoint(meta)?;

        tracing::debug!(
            method = %meta.method,
            url = %url,
            attempt = number,
            "sending request"
        );
        if self.inner.debug {
            if let Some(payload) = payload {
                tracing::debug!(body = %payload, "request body");
            }
        }

        let mut request = self
            .inner
            .http
            .request(meta.method.clone(), url)
            .header(
                http::header::AUTHORIZATION,
                format!("Bearer {}", self.inner.api_key),
            )
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::ACCEPT, "application/json")
            .header(http::header::USER_AGENT, USER_AGENT)
            .timeout(self.inner.timeout);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::network("request failed", err))?;

        let status = response.status();
        let headers = response.headers().clone();
        let raw = response
            .text()
            .await
            .map_err(|err| Error::network("failed to read response body", err))?;

        if self.inner.debug {
            tracing::debug!(status = status.as_u16(), body = %raw, "response");
        }

        if status.as_u16() >= 400 {
            let retry_after = rate_limit::retry_after_secs(&headers);
            return Err(Error::from_response(status, &raw, retry_after));
        }

        Ok(raw)
    }

    /// Builds the full request URL.
    ///
    /// Caller-supplied segments are pushed through the URL's path-segment API
    /// so an identifier containing `/` reaches the server percent-encoded as
    /// one opaque segment.
    fn endpoint(&self, meta: &RequestMetadata) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                Error::Configuration("base URL cannot be a base for requests".to_owned())
            })?;
            segments.pop_if_empty();
            for segment in meta.segments() {
                segments.push(segment);
            }
        }
        if !meta.query_pairs().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in meta.query_pairs() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn encode_body<Req>(body: Option<&Req>) -> Result<Option<serde_json::Value>>
where
    Req: Serialize,
{
    body.map(|body| {
        serde_json::to_value(body)
            .map_err(|err| Error::validation_with("failed to serialize request body", err))
    })
    .transpose()
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use sendly::Client;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), sendly::Error> {
/// let client = Client::builder("sk_test_...")
///     .base_url("https://sandbox.sendly.live/api/v1")?
///     .timeout(Duration::from_secs(10))
///     .max_retries(5)
///     .debug(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<Url>,
    timeout: Duration,
    max_retries: u32,
    call_timeout: Option<Duration>,
    debug: bool,
    rate_per_sec: f64,
    burst: u32,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Creates a builder with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            call_timeout: None,
            debug: false,
            rate_per_sec: DEFAULT_RATE_PER_SEC,
            burst: DEFAULT_BURST,
            http: None,
        }
    }

    /// Overrides the API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the per-attempt request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum number of retries after the first attempt (default 3).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Bounds one logical call, covering all attempts and waits.
    ///
    /// When the deadline elapses at any suspension point, the call returns
    /// [`Error::Cancelled`] immediately instead of continuing to wait or
    /// retry. Unset by default.
    pub fn call_timeout(mut self, deadline: Duration) -> Self {
        self.call_timeout = Some(deadline);
        self
    }

    /// Enables debug logging of request and response bodies via `tracing`.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Configures the client-side rate limiter (default 10 requests/second
    /// with a burst of 10).
    pub fn rate_limit(mut self, rate_per_sec: f64, burst: u32) -> Self {
        self.rate_per_sec = rate_per_sec;
        self.burst = burst;
        self
    }

    /// Supplies a custom transport, e.g. to configure proxies or TLS.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the configured [`Client`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is empty or the HTTP
    /// transport cannot be constructed.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Configuration("API key is required".to_owned()));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().build().map_err(|err| {
                Error::Configuration(format!("failed to build HTTP client: {err}"))
            })?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_key: self.api_key,
                timeout: self.timeout,
                max_retries: self.max_retries,
                call_timeout: self.call_timeout,
                debug: self.debug,
                rate_limiter: RateLimiter::new(self.rate_per_sec, self.burst),
            }),
        })
    }
}
