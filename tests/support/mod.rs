//! Shared doubles for exercising the notifier without a host application.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use tokio::sync::Barrier;

use upbeat_slack::config::SlackConfig;
use upbeat_slack::domain::{Check, CheckEvent, CheckId, EventKind};
use upbeat_slack::error::{StoreError, TransportError};
use upbeat_slack::port::{CheckStore, SlackMessage, SlackTransport};

pub fn sample_check() -> Check {
    Check {
        id: CheckId::random(),
        name: "FooBar".into(),
        url: "http://foobar.com".into(),
    }
}

pub fn sample_event(check_id: CheckId, kind: EventKind) -> CheckEvent {
    CheckEvent {
        check_id,
        kind,
        timestamp: Local.with_ymd_and_hms(1986, 9, 4, 20, 30, 0).unwrap(),
        details: None,
        downtime: None,
    }
}

pub fn config_with_toggles(toml_toggles: &str) -> SlackConfig {
    SlackConfig::parse_toml(&format!(
        r##"
webhook_url = "https://hooks.slack.com/services/123"
channel = "#server-fault"

[events]
{toml_toggles}
"##
    ))
    .expect("parse test config")
}

/// Check store that always resolves to the same check.
pub struct StaticCheckStore {
    check: Check,
    lookups: AtomicUsize,
}

impl StaticCheckStore {
    pub fn new(check: Check) -> Self {
        Self {
            check,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CheckStore for StaticCheckStore {
    async fn find_check(&self, _id: &CheckId) -> Result<Check, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.check.clone())
    }
}

/// Check store whose lookups always fail.
#[derive(Default)]
pub struct FailingCheckStore;

#[async_trait]
impl CheckStore for FailingCheckStore {
    async fn find_check(&self, id: &CheckId) -> Result<Check, StoreError> {
        Err(StoreError::NotFound { check_id: *id })
    }
}

/// Transport that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SlackMessage>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SlackMessage> {
        self.sent.lock().expect("lock sent messages").clone()
    }
}

#[async_trait]
impl SlackTransport for RecordingTransport {
    async fn send(&self, message: &SlackMessage) -> Result<(), TransportError> {
        self.sent
            .lock()
            .expect("lock sent messages")
            .push(message.clone());
        Ok(())
    }
}

/// Transport whose sends always fail.
#[derive(Default)]
pub struct FailingTransport {
    attempts: AtomicUsize,
}

impl FailingTransport {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlackTransport for FailingTransport {
    async fn send(&self, _message: &SlackMessage) -> Result<(), TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::Status {
            status: 500,
            body: "no_service".into(),
        })
    }
}

/// Transport that parks every send on a shared barrier.
///
/// Only releases once the expected number of sends are in flight at the
/// same time, which proves per-event pipelines run concurrently.
pub struct BarrierTransport {
    barrier: Arc<Barrier>,
    recorder: Arc<RecordingTransport>,
}

impl BarrierTransport {
    pub fn new(barrier: Arc<Barrier>, recorder: Arc<RecordingTransport>) -> Self {
        Self { barrier, recorder }
    }
}

#[async_trait]
impl SlackTransport for BarrierTransport {
    async fn send(&self, message: &SlackMessage) -> Result<(), TransportError> {
        self.barrier.wait().await;
        self.recorder.send(message).await
    }
}
