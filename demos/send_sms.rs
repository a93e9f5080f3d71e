//! Send a message, then read it back and check the account balance.
//!
//! Run with: `SENDLY_API_KEY=sk_... cargo run --example send_sms`

use sendly::{Client, ListMessagesRequest, SendMessageRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("sendly=info")
        .init();

    let api_key = std::env::var("SENDLY_API_KEY").unwrap_or_else(|_| "sk_test_v1_example".into());
    let client = Client::new(api_key)?;

    println!("=== Sending SMS ===");
    match client
        .messages()
        .send(&SendMessageRequest {
            to: "+15551234567".to_owned(),
            text: "Hello from the Sendly Rust SDK!".to_owned(),
            ..Default::default()
        })
        .await
    {
        Ok(message) => {
            println!("Message sent!");
            println!("  ID: {}", message.id);
            println!("  Status: {:?}", message.status);
            println!("  Credits used: {}", message.credits_used);
        }
        Err(err) => handle_error(&err),
    }

    println!("\n=== Listing Messages ===");
    match client
        .messages()
        .list(&ListMessagesRequest {
            limit: Some(10),
            ..Default::default()
        })
        .await
    {
        Ok(page) => {
            println!("Found {} messages", page.data.len());
            for message in &page.data {
                println!("  - {}: {} ({:?})", message.id, message.to, message.status);
            }
        }
        Err(err) => handle_error(&err),
    }

    println!("\n=== Credits ===");
    match client.account().credits().await {
        Ok(credits) => println!(
            "Balance: {} ({} reserved, {} available)",
            credits.balance, credits.reserved_balance, credits.available_balance
        ),
        Err(err) => handle_error(&err),
    }

    Ok(())
}

fn handle_error(err: &sendly::Error) {
    if err.is_authentication() {
        eprintln!("Authentication failed: {err}");
    } else if err.is_rate_limit() {
        eprintln!("Rate limit exceeded: {err}");
    } else if err.is_insufficient_credits() {
        eprintln!("Insufficient credits: {err}");
    } else if err.is_validation() {
        eprintln!("Invalid request: {err}");
    } else if err.is_network() {
        eprintln!("Network error: {err}");
    } else {
        eprintln!("API error: {err}");
    }
}
