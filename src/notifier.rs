//! The Slack notification pipeline.
//!
//! [`SlackNotifier`] consumes the host's stream of persisted check events.
//! Each qualifying event runs an independent pipeline: resolve the check,
//! format the body, post to the webhook. Pipelines for different events run
//! concurrently and complete in any order; a slow webhook call never blocks
//! the stream loop.
//!
//! There is no state between events. Both failure paths (check lookup,
//! webhook dispatch) are log-and-drop: this event is abandoned, the next is
//! unaffected, nothing is retried.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{error, info, warn};

use crate::config::SlackConfig;
use crate::domain::CheckEvent;
use crate::format::message_text;
use crate::port::{CheckStore, SlackMessage, SlackTransport};

/// Forwards check events to a Slack webhook, filtered by configuration.
pub struct SlackNotifier {
    config: Arc<SlackConfig>,
    store: Arc<dyn CheckStore>,
    transport: Arc<dyn SlackTransport>,
}

impl SlackNotifier {
    /// Create a notifier over the host's check store and a transport.
    #[must_use]
    pub fn new(
        config: SlackConfig,
        store: Arc<dyn CheckStore>,
        transport: Arc<dyn SlackTransport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            transport,
        }
    }

    /// Subscribe to the host's "event persisted" stream and spawn the worker.
    ///
    /// The returned handle resolves once the stream closes and every
    /// in-flight pipeline has finished.
    #[must_use]
    pub fn attach(self, mut events: mpsc::UnboundedReceiver<CheckEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(channel = %self.config.channel, "Slack notifications enabled");

            let mut in_flight = JoinSet::new();

            while let Some(event) = events.recv().await {
                if !self.config.events.enabled(event.kind) {
                    continue;
                }

                let config = Arc::clone(&self.config);
                let store = Arc::clone(&self.store);
                let transport = Arc::clone(&self.transport);
                in_flight.spawn(dispatch(config, store, transport, event));

                // Reap pipelines that already finished.
                while in_flight.try_join_next().is_some() {}
            }

            while in_flight.join_next().await.is_some() {}

            warn!("Check event stream closed, Slack notifier shutting down");
        })
    }

    /// Run the filter and one pipeline to completion for a single event.
    ///
    /// For hosts that invoke the plugin directly instead of handing it a
    /// stream.
    pub async fn handle_event(&self, event: CheckEvent) {
        if !self.config.events.enabled(event.kind) {
            return;
        }

        dispatch(
            Arc::clone(&self.config),
            Arc::clone(&self.store),
            Arc::clone(&self.transport),
            event,
        )
        .await;
    }
}

/// One event's pipeline: resolve the check, format, send.
async fn dispatch(
    config: Arc<SlackConfig>,
    store: Arc<dyn CheckStore>,
    transport: Arc<dyn SlackTransport>,
    event: CheckEvent,
) {
    let check = match store.find_check(&event.check_id).await {
        Ok(check) => check,
        Err(e) => {
            error!(
                check_id = %event.check_id,
                kind = %event.kind,
                error = %e,
                "Failed to resolve check for event"
            );
            return;
        }
    };

    let message = SlackMessage {
        text: message_text(&event, &check),
        channel: config.channel.clone(),
        username: config.username.clone(),
    };

    if let Err(e) = transport.send(&message).await {
        error!(
            check_id = %event.check_id,
            kind = %event.kind,
            error = %e,
            "Failed to send Slack notification"
        );
    }
}
