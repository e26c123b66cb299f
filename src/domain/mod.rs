//! Records owned by the host application.
//!
//! The plugin consumes checks and check events read-only; it never creates,
//! mutates, or persists them.

mod check;
mod event;

pub use check::{Check, CheckId};
pub use event::{CheckEvent, EventKind};
