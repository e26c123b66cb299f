//! Traits at the seams to the host application.
//!
//! The plugin talks to two external collaborators: the host's check
//! persistence layer (for resolving an event back to its check) and the
//! Slack webhook transport. Both are behind traits so the notifier can be
//! exercised in isolation.

mod store;
mod transport;

pub use store::CheckStore;
pub use transport::{SlackMessage, SlackTransport};
