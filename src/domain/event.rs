//! Check state transitions as recorded by the host.

use std::fmt;

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Deserializer};

use super::check::CheckId;

/// Kind of state transition a check event records.
///
/// The set recognized by the host is closed (`up`, `down`, `paused`,
/// `restarted`), but events are ingested from an external stream, so an
/// unrecognized kind deserializes to [`EventKind::Unknown`] rather than
/// failing. Unknown kinds can never be enabled by configuration and format
/// to an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The check responded correctly (possibly recovering from a `down`).
    Up,
    /// A test on the check's URL failed.
    Down,
    /// The check was manually paused.
    Paused,
    /// The check was manually restarted.
    Restarted,
    /// An event kind outside the recognized set.
    Unknown,
}

impl EventKind {
    /// The wire name of this kind, or `"unknown"` for the catch-all.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Paused => "paused",
            Self::Restarted => "restarted",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "up" => Self::Up,
            "down" => Self::Down,
            "paused" => Self::Paused,
            "restarted" => Self::Restarted,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// An immutable record of one state transition of a monitored check.
///
/// Produced by the host's persistence layer at the moment the event is
/// stored; the plugin observes each event exactly once. The owning check is
/// referenced by id and resolved lazily through the
/// [`CheckStore`](crate::port::CheckStore) port.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEvent {
    /// The check this event belongs to.
    pub check_id: CheckId,
    /// What happened.
    #[serde(rename = "message")]
    pub kind: EventKind,
    /// When it happened.
    pub timestamp: DateTime<Local>,
    /// Error description, present only for `down` events.
    #[serde(default)]
    pub details: Option<String>,
    /// Time spent down, present only for `up` events recovering from a
    /// prior `down`. Carried as milliseconds on the wire.
    #[serde(default, deserialize_with = "downtime_ms")]
    pub downtime: Option<Duration>,
}

fn downtime_ms<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = Option::<i64>::deserialize(deserializer)?;
    Ok(ms.map(Duration::milliseconds))
}
