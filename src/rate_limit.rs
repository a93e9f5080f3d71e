//! Client-side rate limiting and `Retry-After` header parsing.
//!
//! Each [`crate::Client`] owns one token-bucket [`RateLimiter`] for its
//! lifetime; every request acquires a permit before its first attempt, so the
//! outbound request rate is capped regardless of how many tasks share the
//! client. Server-supplied `Retry-After` hints are parsed here as well.

use http::HeaderMap;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime};

/// Token bucket shared by all requests issued through one client instance.
///
/// The bucket refills continuously at `rate` tokens per second up to `burst`.
/// State is mutex-guarded; the lock is only held to compute, never across an
/// await.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    state: Mutex<Bucket>,
    rate: f64,
    burst: f64,
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Creates a bucket that starts full at `burst` tokens.
    pub fn new(rate_per_sec: f64, burst: u32) -> Self {
        let rate = if rate_per_sec > 0.0 { rate_per_sec } else { 1.0 };
        let burst = f64::from(burst.max(1));
        Self {
            state: Mutex::new(Bucket {
                tokens: burst,
                last_refill: Instant::now(),
            }),
            rate,
            burst,
        }
    }

    /// Takes one token, sleeping until the bucket has refilled enough.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = match self.state.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let now = Instant::now();
                let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
                bucket.tokens = (bucket.tokens + elapsed * self.rate).min(self.burst);
                bucket.last_refill = now;
                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    None
                } else {
                    Some(Duration::from_secs_f64((1.0 - bucket.tokens) / self.rate))
                }
            };
            match wait {
                None => return,
                Some(delay) => tokio::time::sleep(delay).await,
            }
        }
    }
}

/// Parses the `Retry-After` header into whole seconds.
///
/// Supports both delay-seconds (integer) and HTTP-date formats; returns 0
/// when the header is absent or unparseable.
pub(crate) fn retry_after_secs(headers: &HeaderMap) -> u64 {
    let Some(value) = headers
        .get(http::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
    else {
        return 0;
    };

    if let Ok(seconds) = value.trim().parse::<u64>() {
        return seconds;
    }

    if let Ok(date) = httpdate::parse_http_date(value) {
        if let Ok(until) = date.duration_since(SystemTime::now()) {
            return until.as_secs();
        }
    }

    0
}
