//! Message operations: send, schedule, batch, list, cancel.

use crate::{
    client::Client,
    error::{Error, Result},
    metadata::RequestMetadata,
    types::{
        BatchMessageResponse, CancelScheduledMessageResponse, ListBatchesRequest,
        ListBatchesResponse, ListMessagesRequest, ListMessagesResponse,
        ListScheduledMessagesRequest, ListScheduledMessagesResponse, Message,
        ScheduleMessageRequest, ScheduledMessage, SendBatchRequest, SendMessageRequest,
    },
};
use http::Method;

/// Message-related API operations.
///
/// Obtained from [`Client::messages`]. Every operation validates its input
/// locally first; invalid input fails with a [`Error::Validation`] before any
/// request is sent.
#[derive(Clone)]
pub struct MessagesService {
    client: Client,
}

impl MessagesService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Sends an SMS message.
    ///
    /// Requires `to` and `text` to be non-empty.
    pub async fn send(&self, request: &SendMessageRequest) -> Result<Message> {
        if request.to.is_empty() {
            return Err(Error::validation("to is required"));
        }
        if request.text.is_empty() {
            return Err(Error::validation("text is required"));
        }

        let meta = RequestMetadata::new(Method::POST, "/messages");
        self.client.request(meta, Some(request)).await
    }

    /// Lists messages, newest first.
    pub async fn list(&self, request: &ListMessagesRequest) -> Result<ListMessagesResponse> {
        let mut meta = RequestMetadata::new(Method::GET, "/messages");
        if let Some(limit) = request.limit {
            meta = meta.query("limit", limit.to_string());
        }
        if let Some(offset) = request.offset {
            meta = meta.query("offset", offset.to_string());
        }
        if let Some(status) = request.status {
            meta = meta.query("status", status.as_str());
        }
        if let Some(to) = &request.to {
            meta = meta.query("to", to.clone());
        }

        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves a single message by ID.
    pub async fn get(&self, id: impl AsRef<str>) -> Result<Message> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("message ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/messages").segment(id);
        self.client.request(meta, None::<&()>).await
    }

    /// Schedules an SMS message for future delivery.
    ///
    /// Requires `to`, `text` and `scheduled_at` to be non-empty.
    pub async fn schedule(&self, request: &ScheduleMessageRequest) -> Result<ScheduledMessage> {
        if request.to.is_empty() {
            return Err(Error::validation("to is required"));
        }
        if request.text.is_empty() {
            return Err(Error::validation("text is required"));
        }
        if request.scheduled_at.is_empty() {
            return Err(Error::validation("scheduledAt is required"));
        }

        let meta = RequestMetadata::new(Method::POST, "/messages/schedule");
        self.client.request(meta, Some(request)).await
    }

    /// Lists scheduled messages.
    pub async fn list_scheduled(
        &self,
        request: &ListScheduledMessagesRequest,
    ) -> Result<ListScheduledMessagesResponse> {
        let mut meta = RequestMetadata::new(Method::GET, "/messages/scheduled");
        if let Some(limit) = request.limit {
            meta = meta.query("limit", limit.to_string());
        }
        if let Some(offset) = request.offset {
            meta = meta.query("offset", offset.to_string());
        }
        if let Some(status) = request.status {
            meta = meta.query("status", status.as_str());
        }

        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves a single scheduled message by ID.
    pub async fn get_scheduled(&self, id: impl AsRef<str>) -> Result<ScheduledMessage> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("scheduled message ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/messages/scheduled").segment(id);
        self.client.request(meta, None::<&()>).await
    }

    /// Cancels a scheduled message, refunding its reserved credits.
    pub async fn cancel_scheduled(
        &self,
        id: impl AsRef<str>,
    ) -> Result<CancelScheduledMessageResponse> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::validation("scheduled message ID is required"));
        }

        let meta = RequestMetadata::new(Method::DELETE, "/messages/scheduled").segment(id);
        self.client.request(meta, None::<&()>).await
    }

    /// Sends multiple SMS messages in one batch.
    ///
    /// Every item is validated before any request is sent; the first invalid
    /// item fails the call with its zero-based index in the message.
    pub async fn send_batch(&self, request: &SendBatchRequest) -> Result<BatchMessageResponse> {
        if request.messages.is_empty() {
            return Err(Error::validation("messages are required"));
        }
        for (index, item) in request.messages.iter().enumerate() {
            if item.to.is_empty() {
                return Err(Error::validation(format!(
                    "to is required for message at index {index}"
                )));
            }
            if item.text.is_empty() {
                return Err(Error::validation(format!(
                    "text is required for message at index {index}"
                )));
            }
        }

        let meta = RequestMetadata::new(Method::POST, "/messages/batch");
        self.client.request(meta, Some(request)).await
    }

    /// Retrieves the status of a batch by ID.
    pub async fn get_batch(&self, batch_id: impl AsRef<str>) -> Result<BatchMessageResponse> {
        let batch_id = batch_id.as_ref();
        if batch_id.is_empty() {
            return Err(Error::validation("batch ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/messages/batch").segment(batch_id);
        self.client.request(meta, None::<&()>).await
    }

    /// Lists batches.
    pub async fn list_batches(&self, request: &ListBatchesRequest) -> Result<ListBatchesResponse> {
        let mut meta = RequestMetadata::new(Method::GET, "/messages/batches");
        if let Some(limit) = request.limit {
            meta = meta.query("limit", limit.to_string());
        }
        if let Some(offset) = request.offset {
            meta = meta.query("offset", offset.to_string());
        }
        if let Some(status) = request.status {
            meta = meta.query("status", status.as_str());
        }

        self.client.request(meta, None::<&()>).await
    }
}
