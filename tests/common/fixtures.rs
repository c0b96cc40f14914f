//! Test data factories for folio-contact types
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use super::mock_relay::{MockRelay, RecordingNotifier, RelayBehavior};
use folio_contact::submit::SubmissionController;
use folio_contact::types::{Field, FormFields};
use std::sync::Arc;

/// A form that passes validation
pub fn make_fields() -> FormFields {
    FormFields {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hi".to_string(),
        message: "Hello".to_string(),
    }
}

/// Controller plus handles on its collaborators
pub struct Harness {
    pub controller: Arc<SubmissionController>,
    pub relay: Arc<MockRelay>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Build a controller around a mock relay and a recording notifier
pub fn make_harness(behavior: RelayBehavior) -> Harness {
    let relay = Arc::new(MockRelay::new(behavior));
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = Arc::new(SubmissionController::new(
        relay.clone(),
        notifier.clone(),
    ));
    Harness {
        controller,
        relay,
        notifier,
    }
}

/// Type every field of `fields` into the controller
pub fn fill(controller: &SubmissionController, fields: &FormFields) {
    for field in Field::ALL {
        assert!(controller.edit(field, fields.get(field)));
    }
}
