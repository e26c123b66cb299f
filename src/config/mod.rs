//! Plugin configuration loading and validation.

mod logging;
mod slack;

pub use logging::LoggingConfig;
pub use slack::{EventToggles, SlackConfig};
