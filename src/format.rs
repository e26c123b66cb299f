//! Pure event-to-message-body mapping.
//!
//! The mapping is total: every event kind, including [`EventKind::Unknown`],
//! produces a defined body. Formatting never fails and never touches I/O,
//! which keeps it directly testable.

use chrono::{DateTime, Duration, Local};

use crate::domain::{Check, CheckEvent, EventKind};

/// Long human-readable local timestamp, e.g.
/// `Thursday, September 4, 1986 8:30 PM`.
const TIMESTAMP_FORMAT: &str = "%A, %B %-d, %Y %-I:%M %p";

/// Format the notification body for an event and its resolved check.
///
/// Missing `details` on a `down` event renders as an empty string; unknown
/// kinds produce an empty body. Neither is an error.
#[must_use]
pub fn message_text(event: &CheckEvent, check: &Check) -> String {
    let ts = long_timestamp(&event.timestamp);

    match event.kind {
        EventKind::Down => format!(
            "On {ts} a test on URL {} failed with the following error {}",
            check.url,
            event.details.as_deref().unwrap_or_default()
        ),
        EventKind::Paused => format!("On {ts} {} was manually paused", check.url),
        EventKind::Restarted => format!("On {ts} {} was manually restarted", check.url),
        EventKind::Up => match event.downtime {
            Some(downtime) => format!(
                "Check {} went back up. On {ts} and after {} of downtime.",
                check.name,
                humanize(downtime)
            ),
            None => format!(
                "Check {} is now up. On {ts} a test on URL {} responded correctly.",
                check.name, check.url
            ),
        },
        EventKind::Unknown => String::new(),
    }
}

fn long_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Approximate a duration as a short English phrase.
///
/// Bucket boundaries follow the conventions of human-friendly duration
/// display: anything under 45 seconds is "a few seconds", 45-89 minutes is
/// "an hour", 22-35 hours is "a day", and so on up through years.
#[must_use]
pub fn humanize(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    let minutes = (seconds + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;

    if seconds < 45 {
        "a few seconds".into()
    } else if seconds < 90 {
        "a minute".into()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        "an hour".into()
    } else if hours < 22 {
        format!("{hours} hours")
    } else if hours < 36 {
        "a day".into()
    } else if days < 26 {
        format!("{days} days")
    } else if days < 46 {
        "a month".into()
    } else if days < 320 {
        let months = ((days as f64) / 30.44).round() as i64;
        format!("{months} months")
    } else if days < 548 {
        "a year".into()
    } else {
        let years = ((days as f64) / 365.25).round() as i64;
        format!("{years} years")
    }
}
