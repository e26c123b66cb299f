//! Adapters implementing the outbound ports.

mod webhook;

pub use webhook::WebhookTransport;
