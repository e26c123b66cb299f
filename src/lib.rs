//! upbeat-slack - Slack notifications for check lifecycle events.
//!
//! This crate is a notification plugin for an uptime monitoring host. It
//! subscribes to the host's stream of persisted check events (`up`, `down`,
//! `paused`, `restarted`), filters them by configuration, formats a
//! human-readable message, and delivers it to a Slack incoming webhook.
//!
//! Delivery is fire-and-forget: exactly one attempt per qualifying event,
//! no retry, no acknowledgement tracking. Lookup and delivery failures are
//! logged and dropped; nothing in this crate is fatal to the host.
//!
//! # Modules
//!
//! - [`config`] - Plugin configuration loaded from a TOML section
//! - [`domain`] - Externally-owned records the plugin consumes
//! - [`error`] - Error types for the crate
//! - [`format`] - Pure event-to-message-body mapping
//! - [`port`] - Traits for the host collaborators (check store, transport)
//! - [`adapter`] - The reqwest-backed webhook transport
//! - [`notifier`] - The event pipeline wiring it all together
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use upbeat_slack::adapter::WebhookTransport;
//! use upbeat_slack::config::SlackConfig;
//! use upbeat_slack::notifier::SlackNotifier;
//!
//! # fn store() -> Arc<dyn upbeat_slack::port::CheckStore> { unimplemented!() }
//! # async fn run() {
//! let config = SlackConfig::load("slack.toml").unwrap();
//! let transport = Arc::new(WebhookTransport::new(config.webhook_url.clone()));
//! let notifier = SlackNotifier::new(config, store(), transport);
//!
//! let (tx, rx) = mpsc::unbounded_channel();
//! let worker = notifier.attach(rx);
//! # let _ = (tx, worker);
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod notifier;
pub mod port;
