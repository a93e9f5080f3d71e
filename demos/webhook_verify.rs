//! Verify and parse a webhook delivery the way an HTTP handler would.
//!
//! Run with: `cargo run --example webhook_verify`

fn main() -> Result<(), sendly::Error> {
    let secret = "whsec_example_secret";

    // What Sendly would POST to your endpoint.
    let raw_body = serde_json::json!({
        "id": "evt_123",
        "type": "message.delivered",
        "data": {
            "message_id": "msg_123",
            "status": "delivered",
            "to": "+15551234567",
            "from": "SENDLY",
            "delivered_at": "2024-01-01T00:00:05Z",
            "segments": 1,
            "credits_used": 1,
        },
        "created_at": "2024-01-01T00:00:00Z",
        "api_version": "v1",
    })
    .to_string();

    // The X-Sendly-Signature header that would accompany it.
    let signature = sendly::generate_signature(&raw_body, secret);
    println!("signature: {signature}");

    // In a handler: verify first, then parse.
    assert!(sendly::verify_signature(&raw_body, &signature, secret));
    let event = sendly::parse_event(&raw_body, &signature, secret)?;
    println!(
        "event {:?}: message {} is now {:?}",
        event.event_type, event.data.message_id, event.data.status
    );

    // A tampered body no longer verifies.
    let tampered = raw_body.replace("msg_123", "msg_999");
    assert!(!sendly::verify_signature(&tampered, &signature, secret));
    println!("tampered payload rejected");

    Ok(())
}
