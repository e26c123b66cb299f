//! Outbound Slack dispatch port.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TransportError;

/// The payload delivered to a Slack incoming webhook.
///
/// Field names match the webhook JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    /// Formatted notification body.
    pub text: String,
    /// Destination channel.
    pub channel: String,
    /// Sender identity shown in the message.
    pub username: String,
}

/// One best-effort delivery attempt to the messaging endpoint.
///
/// Exactly one call per qualifying event; no retry, no acknowledgement
/// tracking. A failure is logged by the caller and otherwise ignored.
#[async_trait]
pub trait SlackTransport: Send + Sync {
    /// Send one message.
    async fn send(&self, message: &SlackMessage) -> Result<(), TransportError>;
}
