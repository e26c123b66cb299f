//! Reqwest-backed Slack incoming webhook transport.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::TransportError;
use crate::port::{SlackMessage, SlackTransport};

/// Posts messages to a Slack incoming webhook as JSON.
///
/// Uses the transport's default timeout; no retry. The underlying
/// `reqwest::Client` holds a connection pool and is cheap to clone.
pub struct WebhookTransport {
    client: Client,
    webhook_url: String,
}

impl WebhookTransport {
    /// Create a transport for the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), webhook_url)
    }

    /// Create a transport reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl SlackTransport for WebhookTransport {
    async fn send(&self, message: &SlackMessage) -> Result<(), TransportError> {
        debug!(channel = %message.channel, "Posting Slack webhook message");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
