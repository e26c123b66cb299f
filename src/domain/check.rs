//! The monitored target and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Check identifier - newtype for type safety.
///
/// The inner Uuid is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(Uuid);

impl CheckId {
    /// Create a new `CheckId` from a Uuid.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying Uuid.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CheckId {
    fn from(id: Uuid) -> Self {
        Self::new(id)
    }
}

/// A monitored endpoint under periodic observation.
///
/// Owned by the host's persistence layer; the plugin only reads the display
/// name and target URL when formatting a notification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Check {
    /// Stable identifier used to resolve events back to their check.
    pub id: CheckId,
    /// Display label shown in notifications.
    pub name: String,
    /// Target endpoint under observation.
    pub url: String,
}
