//! Check lookup port.

use async_trait::async_trait;

use crate::domain::{Check, CheckId};
use crate::error::StoreError;

/// Asynchronous, fallible lookup of the check an event belongs to.
///
/// Implemented by the host over its persistence layer. A lookup failure is
/// non-fatal: the notifier logs it and drops that event.
///
/// Implementations must be thread-safe (`Send + Sync`); lookups for
/// different events may be in flight concurrently.
#[async_trait]
pub trait CheckStore: Send + Sync {
    /// Resolve a check by id.
    async fn find_check(&self, id: &CheckId) -> Result<Check, StoreError>;
}
