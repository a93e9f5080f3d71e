//! Message service tests: request shapes, query building, local validation.

use sendly::{
    BatchMessageItem, Client, ListBatchesRequest, ListMessagesRequest,
    ListScheduledMessagesRequest, MessageStatus, ScheduleMessageRequest, ScheduledMessageStatus,
    SendBatchRequest, SendMessageRequest,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::builder("test-api-key")
        .base_url(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_posts_the_message_and_returns_the_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(serde_json::json!({
            "to": "+15551234567",
            "text": "Hello from Sendly!",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "msg_123",
            "to": "+15551234567",
            "from": "SENDLY",
            "text": "Hello from Sendly!",
            "status": "queued",
            "segments": 1,
            "creditsUsed": 1,
            "createdAt": "2024-01-01T00:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client
        .messages()
        .send(&SendMessageRequest {
            to: "+15551234567".to_owned(),
            text: "Hello from Sendly!".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(message.id, "msg_123");
    assert_eq!(message.status, MessageStatus::Queued);
    assert_eq!(message.credits_used, 1);
    assert_eq!(message.from.as_deref(), Some("SENDLY"));
}

#[tokio::test]
async fn send_rejects_missing_fields_without_touching_the_network() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail differently.

    let client = client_for(&server).await;

    let err = client
        .messages()
        .send(&SendMessageRequest {
            to: String::new(),
            text: "hi".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("to is required"));

    let err = client
        .messages()
        .send(&SendMessageRequest {
            to: "+15551234567".to_owned(),
            text: String::new(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("text is required"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_builds_the_query_from_set_filters_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("limit", "10"))
        .and(query_param("status", "delivered"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{
                "id": "msg_1",
                "to": "+15551234567",
                "text": "hi",
                "status": "delivered",
            }],
            "count": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client
        .messages()
        .list(&ListMessagesRequest {
            limit: Some(10),
            status: Some(MessageStatus::Delivered),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].status, MessageStatus::Delivered);

    // Unset filters must not appear in the query string at all.
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("offset"));
    assert!(!query.contains("to="));
}

#[tokio::test]
async fn get_requires_an_id() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client.messages().get("").await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("message ID is required"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn schedule_round_trips_the_documented_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages/schedule"))
        .and(body_json(serde_json::json!({
            "to": "+1234567890",
            "text": "Scheduled message",
            "scheduledAt": "2024-12-31T23:59:59Z",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "sched_123",
            "to": "+1234567890",
            "text": "Scheduled message",
            "scheduledAt": "2024-12-31T23:59:59Z",
            "status": "scheduled",
            "creditsReserved": 1,
            "createdAt": "2024-01-01T00:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let scheduled = client
        .messages()
        .schedule(&ScheduleMessageRequest {
            to: "+1234567890".to_owned(),
            text: "Scheduled message".to_owned(),
            scheduled_at: "2024-12-31T23:59:59Z".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(scheduled.id, "sched_123");
    assert_eq!(scheduled.status, ScheduledMessageStatus::Scheduled);
    assert_eq!(scheduled.credits_reserved, 1);
    assert_eq!(scheduled.scheduled_at, "2024-12-31T23:59:59Z");
}

#[tokio::test]
async fn schedule_requires_a_send_time() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client
        .messages()
        .schedule(&ScheduleMessageRequest {
            to: "+1234567890".to_owned(),
            text: "Scheduled message".to_owned(),
            scheduled_at: String::new(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("scheduledAt is required"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_scheduled_filters_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/messages/scheduled"))
        .and(query_param("status", "scheduled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "count": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client
        .messages()
        .list_scheduled(&ListScheduledMessagesRequest {
            status: Some(ScheduledMessageStatus::Scheduled),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.count, 0);
}

#[tokio::test]
async fn cancel_scheduled_deletes_and_reports_the_refund() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/messages/scheduled/sched_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "sched_123",
            "status": "cancelled",
            "creditsRefunded": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let cancelled = client.messages().cancel_scheduled("sched_123").await.unwrap();

    assert_eq!(cancelled.id, "sched_123");
    assert_eq!(cancelled.status, ScheduledMessageStatus::Cancelled);
    assert_eq!(cancelled.credits_refunded, 1);
}

#[tokio::test]
async fn send_batch_posts_all_items() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages/batch"))
        .and(body_json(serde_json::json!({
            "messages": [
                {"to": "+15551230001", "text": "one"},
                {"to": "+15551230002", "text": "two"},
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "batchId": "batch_123",
            "status": "processing",
            "total": 2,
            "queued": 2,
            "sent": 0,
            "failed": 0,
            "creditsUsed": 2,
            "createdAt": "2024-01-01T00:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let batch = client
        .messages()
        .send_batch(&SendBatchRequest {
            messages: vec![
                BatchMessageItem {
                    to: "+15551230001".to_owned(),
                    text: "one".to_owned(),
                },
                BatchMessageItem {
                    to: "+15551230002".to_owned(),
                    text: "two".to_owned(),
                },
            ],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(batch.batch_id, "batch_123");
    assert_eq!(batch.total, 2);
}

#[tokio::test]
async fn send_batch_reports_the_first_invalid_item_by_index() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client
        .messages()
        .send_batch(&SendBatchRequest {
            messages: vec![
                BatchMessageItem {
                    to: "+15551230001".to_owned(),
                    text: "one".to_owned(),
                },
                BatchMessageItem {
                    to: String::new(),
                    text: "two".to_owned(),
                },
            ],
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("index 1"), "got: {err}");
    assert!(server.received_requests().await.unwrap().is_empty());

    let err = client
        .messages()
        .send_batch(&SendBatchRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("messages are required"));
}

#[tokio::test]
async fn get_batch_and_list_batches_hit_their_endpoints() {
    let server = MockServer::start().await;

    let batch = serde_json::json!({
        "batchId": "batch_123",
        "status": "completed",
        "total": 2,
        "queued": 0,
        "sent": 2,
        "failed": 0,
        "creditsUsed": 2,
        "messages": [
            {"to": "+15551230001", "messageId": "msg_1", "status": "sent"},
            {"to": "+15551230002", "messageId": "msg_2", "status": "sent"},
        ],
        "completedAt": "2024-01-01T00:10:00Z",
    });

    Mock::given(method("GET"))
        .and(path("/messages/batch/batch_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/messages/batches"))
        .and(query_param("status", "completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [batch],
            "count": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let fetched = client.messages().get_batch("batch_123").await.unwrap();
    assert_eq!(fetched.sent, 2);
    assert_eq!(fetched.messages.len(), 2);

    let page = client
        .messages()
        .list_batches(&ListBatchesRequest {
            status: Some(sendly::BatchStatus::Completed),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.data[0].batch_id, "batch_123");
}
