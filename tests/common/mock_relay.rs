//! Mock mail relay and recording notifier for testing
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use folio_contact::error::{Error, Result};
use folio_contact::relay::MailRelay;
use folio_contact::submit::NotificationSink;
use folio_contact::types::FormFields;
use std::sync::Mutex;
use tokio::sync::Notify;

/// How the mock answers `send`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayBehavior {
    /// Resolve with the success signal
    Accept,
    /// Resolve with a non-success status
    Reject(u16),
    /// Never resolve
    Hang,
    /// Wait for `release()`, then accept
    Gated,
}

/// Simple mock relay for testing
///
/// Manually implements `MailRelay` with call tracking so tests can assert
/// exactly how often the relay was reached and with which fields.
pub struct MockRelay {
    behavior: Mutex<RelayBehavior>,
    gate: Notify,
    send_calls: Mutex<Vec<FormFields>>,
}

impl MockRelay {
    /// Create a mock with the given behavior
    pub fn new(behavior: RelayBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            gate: Notify::new(),
            send_calls: Mutex::new(Vec::new()),
        }
    }

    /// Change how subsequent calls are answered
    pub fn set_behavior(&self, behavior: RelayBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    /// Let a gated call finish
    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// All fields the relay was called with
    pub fn get_send_calls(&self) -> Vec<FormFields> {
        self.send_calls.lock().unwrap().clone()
    }

    /// Number of relay invocations
    pub fn send_count(&self) -> usize {
        self.send_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MailRelay for MockRelay {
    async fn send(&self, fields: &FormFields) -> Result<()> {
        self.send_calls.lock().unwrap().push(fields.clone());

        let behavior = *self.behavior.lock().unwrap();
        match behavior {
            RelayBehavior::Accept => Ok(()),
            RelayBehavior::Reject(status) => Err(Error::RelayStatus(status)),
            RelayBehavior::Hang => {
                std::future::pending::<()>().await;
                Ok(())
            }
            RelayBehavior::Gated => {
                self.gate.notified().await;
                Ok(())
            }
        }
    }
}

/// One notifier call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Loading(String),
    Success(String),
    Error(String),
    Dismiss,
}

/// Notifier that records every call in order
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// All calls so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Number of `dismiss_active` calls
    pub fn dismiss_count(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| **n == Notice::Dismiss)
            .count()
    }
}

impl NotificationSink for RecordingNotifier {
    fn show_loading(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Loading(message.to_string()));
    }

    fn show_success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }

    fn dismiss_active(&self) {
        self.notices.lock().unwrap().push(Notice::Dismiss);
    }
}
