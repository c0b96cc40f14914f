//! Contact form submission engine
//!
//! Handles one form's lifecycle:
//! 1. Validation - flag fields that fail their checks
//! 2. Submission - hand the fields to the mail relay
//! 3. Presentation - derive the submit button from state

mod controller;
mod notify;
mod presenter;
mod validate;

pub use controller::SubmissionController;
pub use notify::{messages, NoopNotifier, NotificationSink};
pub use presenter::{
    present, ButtonView, LABEL_RETRY, LABEL_SEND, LABEL_SENT, LABEL_SUBMITTING,
};
pub use validate::{is_field_valid, is_valid_email, validate_form};
