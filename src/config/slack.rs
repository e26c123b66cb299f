//! Slack plugin configuration.
//!
//! Loaded from the host's TOML configuration, typically a `[slack]` section:
//!
//! ```toml
//! webhook_url = "https://hooks.slack.com/services/123"
//! channel = "#server-fault"
//! username = "ServerBot"
//!
//! [events]
//! up = true
//! down = true
//! ```
//!
//! A toggle missing from `[events]` means that event kind is disabled; it is
//! never a configuration error.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::EventKind;
use crate::error::{ConfigError, Result};

use super::logging::LoggingConfig;

fn default_username() -> String {
    "ServerBot".into()
}

/// Per-event-kind notification toggles.
///
/// Every toggle defaults to off. [`EventKind::Unknown`] has no toggle and is
/// always disabled.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EventToggles {
    /// Notify when a check comes back up.
    #[serde(default)]
    pub up: bool,
    /// Notify when a check goes down.
    #[serde(default)]
    pub down: bool,
    /// Notify when a check is manually paused.
    #[serde(default)]
    pub paused: bool,
    /// Notify when a check is manually restarted.
    #[serde(default)]
    pub restarted: bool,
}

impl EventToggles {
    /// Whether notifications are enabled for the given event kind.
    #[must_use]
    pub fn enabled(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Up => self.up,
            EventKind::Down => self.down,
            EventKind::Paused => self.paused,
            EventKind::Restarted => self.restarted,
            EventKind::Unknown => false,
        }
    }
}

/// Slack notification configuration.
///
/// Read-only after load; the notifier never mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Slack incoming webhook URL.
    pub webhook_url: String,
    /// Destination channel, e.g. `#server-fault`.
    pub channel: String,
    /// Sender identity shown in the message.
    #[serde(default = "default_username")]
    pub username: String,
    /// Which event kinds produce notifications.
    #[serde(default)]
    pub events: EventToggles,
    /// Logging setup for hosts that let the plugin own it.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SlackConfig {
    /// Parse configuration from a TOML string and validate it.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "webhook_url",
            }
            .into());
        }
        if let Err(e) = Url::parse(&self.webhook_url) {
            return Err(ConfigError::InvalidValue {
                field: "webhook_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.channel.is_empty() {
            return Err(ConfigError::MissingField { field: "channel" }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn minimal_config_disables_every_event() {
        let config = SlackConfig::parse_toml(
            r##"
webhook_url = "https://hooks.slack.com/services/123"
channel = "#server-fault"
"##,
        )
        .unwrap();

        assert_eq!(config.username, "ServerBot");
        for kind in [
            EventKind::Up,
            EventKind::Down,
            EventKind::Paused,
            EventKind::Restarted,
            EventKind::Unknown,
        ] {
            assert!(!config.events.enabled(kind), "{kind} should be disabled");
        }
    }

    #[test]
    fn partial_toggles_enable_only_named_events() {
        let config = SlackConfig::parse_toml(
            r##"
webhook_url = "https://hooks.slack.com/services/123"
channel = "#server-fault"
username = "UptimeBot"

[events]
down = true
up = true
"##,
        )
        .unwrap();

        assert_eq!(config.username, "UptimeBot");
        assert!(config.events.enabled(EventKind::Up));
        assert!(config.events.enabled(EventKind::Down));
        assert!(!config.events.enabled(EventKind::Paused));
        assert!(!config.events.enabled(EventKind::Restarted));
    }

    #[test]
    fn unknown_kind_cannot_be_enabled() {
        let toggles = EventToggles {
            up: true,
            down: true,
            paused: true,
            restarted: true,
        };
        assert!(!toggles.enabled(EventKind::Unknown));
    }

    #[test]
    fn missing_channel_is_rejected() {
        let result = SlackConfig::parse_toml(
            r#"
webhook_url = "https://hooks.slack.com/services/123"
channel = ""
"#,
        );

        match result {
            Err(Error::Config(ConfigError::MissingField { field: "channel" })) => {}
            other => panic!("expected missing channel error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_webhook_url_is_rejected() {
        let result = SlackConfig::parse_toml(
            r##"
webhook_url = "not a url"
channel = "#server-fault"
"##,
        );

        match result {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "webhook_url",
                ..
            })) => {}
            other => panic!("expected invalid webhook_url error, got {other:?}"),
        }
    }
}
