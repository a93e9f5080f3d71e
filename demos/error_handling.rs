//! Demonstrates branching on the typed error taxonomy.
//!
//! Run with: `cargo run --example error_handling`

use sendly::{Client, Error, SendMessageRequest};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("sendly=debug")
        .init();

    println!("=== Example 1: Local validation ===");
    // An empty recipient is rejected before any request is sent.
    let client = Client::new("sk_test_v1_example")?;
    match client
        .messages()
        .send(&SendMessageRequest {
            to: String::new(),
            text: "hello".to_owned(),
            ..Default::default()
        })
        .await
    {
        Ok(_) => println!("unexpected success"),
        Err(err) => {
            println!("Error: {err}");
            println!("  is_validation: {}", err.is_validation());
            println!("  is_retryable: {}", err.is_retryable());
        }
    }

    println!("\n=== Example 2: Network errors ===");
    // Nothing is listening here, so every attempt fails at the transport.
    let unreachable = Client::builder("sk_test_v1_example")
        .base_url("http://127.0.0.1:9")?
        .max_retries(0)
        .build()?;
    match unreachable.messages().get("msg_123").await {
        Ok(_) => println!("unexpected success"),
        Err(Error::Network { message, source }) => {
            println!("Network error: {message}");
            println!("  cause: {source:?}");
        }
        Err(err) => println!("Other error: {err}"),
    }

    println!("\n=== Example 3: Deadlines ===");
    // A whole-call deadline turns long retry loops into a prompt Cancelled.
    let bounded = Client::builder("sk_test_v1_example")
        .base_url("http://127.0.0.1:9")?
        .max_retries(5)
        .call_timeout(Duration::from_millis(500))
        .build()?;
    match bounded.messages().get("msg_123").await {
        Ok(_) => println!("unexpected success"),
        Err(err) => {
            println!("Error: {err}");
            println!("  is_cancelled: {}", err.is_cancelled());
        }
    }

    println!("\n=== Example 4: Inspecting API errors ===");
    let errors = [
        Error::Authentication(sendly::ApiErrorBody {
            code: "UNAUTHORIZED".to_owned(),
            message: "Invalid API key".to_owned(),
            details: None,
        }),
        Error::RateLimit {
            body: sendly::ApiErrorBody {
                code: "RATE_LIMIT_EXCEEDED".to_owned(),
                message: "Too many requests".to_owned(),
                details: None,
            },
            retry_after: 30,
        },
    ];
    for err in errors {
        println!("Error: {err}");
        println!("  retryable: {}", err.is_retryable());
        if let Some(retry_after) = err.retry_after() {
            println!("  retry after: {retry_after}s");
        }
    }

    Ok(())
}
