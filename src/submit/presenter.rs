//! Submit button presentation
//!
//! Derived from a state snapshot; holds no state of its own.

use crate::types::{FormPhase, SubmissionState};

/// Label while a relay call is in flight
pub const LABEL_SUBMITTING: &str = "Please wait...";
/// Label once the message is delivered
pub const LABEL_SENT: &str = "Message Sent";
/// Label after a failed attempt or with flagged fields
pub const LABEL_RETRY: &str = "Try again";
/// Label before any attempt
pub const LABEL_SEND: &str = "Send Message";

/// Label and enabled state of the submit trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    /// Text on the button
    pub label: &'static str,
    /// Whether the trigger is inactive
    pub disabled: bool,
}

/// Derive the submit button from the current state
///
/// Priority: submitting, then succeeded, then failed or flagged, then idle.
/// A retry label is never shown while a call is in flight, and a delivered
/// form cannot be submitted again.
pub const fn present(state: &SubmissionState) -> ButtonView {
    match state.phase() {
        FormPhase::Submitting => ButtonView {
            label: LABEL_SUBMITTING,
            disabled: true,
        },
        FormPhase::Succeeded => ButtonView {
            label: LABEL_SENT,
            disabled: true,
        },
        FormPhase::Invalid | FormPhase::Failed => ButtonView {
            label: LABEL_RETRY,
            disabled: false,
        },
        FormPhase::Idle => ButtonView {
            label: LABEL_SEND,
            disabled: false,
        },
    }
}
