//! Submission state machine
//!
//! Owns the [`SubmissionState`] of one contact form. Edits and focus events
//! are handled synchronously; `submit()` validates synchronously and then
//! suspends only on the relay call.
//!
//! Methods take `&self` so that a host can hold the controller in an `Arc`
//! and fire events from anywhere on its event loop. The state lock is never
//! held across an `.await`.

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::Error;
use crate::relay::MailRelay;
use crate::submit::notify::{messages, NotificationSink};
use crate::submit::presenter::{present, ButtonView};
use crate::submit::validate::validate_form;
use crate::types::{
    Field, FormEvent, FormPhase, SubmissionState, SubmissionStatus, SubmitOutcome,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives one contact form through its submit lifecycle
pub struct SubmissionController {
    state: Mutex<SubmissionState>,
    relay: Arc<dyn MailRelay>,
    notifier: Arc<dyn NotificationSink>,
    timeout: Duration,
}

impl SubmissionController {
    /// Create a controller with empty fields and the default relay timeout
    pub fn new(relay: Arc<dyn MailRelay>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            state: Mutex::new(SubmissionState::default()),
            relay,
            notifier,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Bound each relay call; on expiry the attempt fails
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn lock(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SubmissionState {
        self.lock().clone()
    }

    /// Current rendering phase
    pub fn phase(&self) -> FormPhase {
        self.lock().phase()
    }

    /// Current submit button
    pub fn button(&self) -> ButtonView {
        present(&self.lock())
    }

    /// Apply a user event
    ///
    /// Returns `false` when the event was rejected because a submission is
    /// in flight. Fields are locked for the whole attempt.
    pub fn handle(&self, event: FormEvent) -> bool {
        let mut state = self.lock();

        if state.status == SubmissionStatus::Submitting {
            debug!("Ignoring {event:?} while submitting");
            return false;
        }

        match event {
            FormEvent::Edit { field, value } => {
                state.fields.set(field, value);
                state.errors.clear(field);
            }
            FormEvent::ClearFieldError { field } => {
                state.errors.clear(field);
            }
        }

        true
    }

    /// Set a field's value and clear its error flag
    pub fn edit(&self, field: Field, value: impl Into<String>) -> bool {
        self.handle(FormEvent::Edit {
            field,
            value: value.into(),
        })
    }

    /// Clear a field's error flag without touching its value
    pub fn focus(&self, field: Field) -> bool {
        self.handle(FormEvent::ClearFieldError { field })
    }

    /// Validate and, if every field passes, send the form to the relay
    ///
    /// A call made while another attempt is in flight returns
    /// [`SubmitOutcome::Ignored`] without touching state or the relay.
    pub async fn submit(&self) -> SubmitOutcome {
        let fields = {
            let mut state = self.lock();

            if state.status == SubmissionStatus::Submitting {
                debug!("Submit ignored: attempt already in flight");
                return SubmitOutcome::Ignored;
            }

            let errors = validate_form(&state.fields);
            if errors.any() {
                state.errors = errors;
                state.status = SubmissionStatus::Failed;
                drop(state);

                debug!("Validation flagged {:?}", errors.flagged());
                self.notifier.show_error(messages::INVALID_FIELDS);
                return SubmitOutcome::Invalid(errors);
            }

            state.errors = errors;
            state.status = SubmissionStatus::Submitting;
            state.fields.clone()
        };

        debug!("Submitting contact form");
        self.notifier.show_loading(messages::SUBMITTING);
        let in_flight = InFlight::arm(self);

        let result = match tokio::time::timeout(self.timeout, self.relay.send(&fields)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(self.timeout)),
        };

        let outcome = match result {
            Ok(()) => {
                info!("Contact message delivered");
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!("Contact message failed: {e}");
                SubmitOutcome::Failed
            }
        };

        in_flight.disarm();
        self.lock().status = if outcome == SubmitOutcome::Sent {
            SubmissionStatus::Succeeded
        } else {
            SubmissionStatus::Failed
        };

        self.notifier.dismiss_active();
        if outcome == SubmitOutcome::Sent {
            self.notifier.show_success(messages::SENT);
        } else {
            self.notifier.show_error(messages::RELAY_FAILED);
        }

        outcome
    }
}

/// Restores an editable form if a `submit()` future is dropped mid-call
struct InFlight<'a> {
    controller: &'a SubmissionController,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn arm(controller: &'a SubmissionController) -> Self {
        Self {
            controller,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        warn!("Submit cancelled before the relay answered");
        self.controller.lock().status = SubmissionStatus::Failed;
        self.controller.notifier.dismiss_active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::submit::NoopNotifier;
    use crate::types::{FieldErrors, FormFields};
    use async_trait::async_trait;

    struct StaticRelay {
        accept: bool,
    }

    #[async_trait]
    impl MailRelay for StaticRelay {
        async fn send(&self, _fields: &FormFields) -> Result<()> {
            if self.accept {
                Ok(())
            } else {
                Err(Error::RelayStatus(500))
            }
        }
    }

    fn controller(accept: bool) -> SubmissionController {
        SubmissionController::new(Arc::new(StaticRelay { accept }), Arc::new(NoopNotifier))
    }

    fn fill(ctrl: &SubmissionController) {
        ctrl.edit(Field::Name, "Ada");
        ctrl.edit(Field::Email, "ada@example.com");
        ctrl.edit(Field::Subject, "Hi");
        ctrl.edit(Field::Message, "Hello");
    }

    #[test]
    fn test_new_state_is_empty() {
        let ctrl = controller(true);
        assert_eq!(ctrl.snapshot(), SubmissionState::default());
        assert_eq!(ctrl.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_empty_submit_is_invalid() {
        let ctrl = controller(true);

        let outcome = ctrl.submit().await;

        let all = FieldErrors {
            name: true,
            email: true,
            subject: true,
            message: true,
        };
        assert_eq!(outcome, SubmitOutcome::Invalid(all));
        assert_eq!(ctrl.snapshot().errors, all);
        assert_eq!(ctrl.phase(), FormPhase::Invalid);
    }

    #[tokio::test]
    async fn test_edit_clears_only_that_flag() {
        let ctrl = controller(true);
        ctrl.submit().await;

        assert!(ctrl.edit(Field::Subject, "Hi"));

        let state = ctrl.snapshot();
        assert!(!state.errors.subject);
        assert!(state.errors.name && state.errors.email && state.errors.message);
        assert_eq!(state.fields.subject, "Hi");
    }

    #[tokio::test]
    async fn test_valid_submit_succeeds() {
        let ctrl = controller(true);
        fill(&ctrl);

        assert_eq!(ctrl.submit().await, SubmitOutcome::Sent);
        assert_eq!(ctrl.phase(), FormPhase::Succeeded);
        assert!(ctrl.button().disabled);
    }

    #[tokio::test]
    async fn test_rejected_submit_fails_and_keeps_fields() {
        let ctrl = controller(false);
        fill(&ctrl);
        let before = ctrl.snapshot().fields;

        assert_eq!(ctrl.submit().await, SubmitOutcome::Failed);

        let state = ctrl.snapshot();
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert!(!state.errors.any());
        assert_eq!(state.fields, before);
        assert!(!ctrl.button().disabled);
    }
}
