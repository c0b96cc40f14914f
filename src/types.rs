//! Core types for folio-contact

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four user-editable contact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Sender's name
    Name,
    /// Sender's reply address
    Email,
    /// Message subject line
    Subject,
    /// Message body
    Message,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Label shown while the field is not flagged
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Hint shown while the field is flagged by validation
    pub const fn error_hint(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name",
            Self::Email => "Please enter a valid email",
            Self::Subject => "Please enter a subject",
            Self::Message => "Please enter a message",
        }
    }

    /// Label or error hint depending on the field's error flag
    pub const fn placeholder(self, has_error: bool) -> &'static str {
        if has_error {
            self.error_hint()
        } else {
            self.label()
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values of the four contact fields
///
/// Empty string means the field has not been filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    /// Sender's name
    pub name: String,
    /// Sender's reply address
    pub email: String,
    /// Message subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

impl FormFields {
    /// Read one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replace one field's value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Per-field validation flags from the last validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    /// Name failed validation
    pub name: bool,
    /// Email failed validation
    pub email: bool,
    /// Subject failed validation
    pub subject: bool,
    /// Message failed validation
    pub message: bool,
}

impl FieldErrors {
    /// Read one field's flag
    pub const fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    /// Set one field's flag
    pub const fn set(&mut self, field: Field, value: bool) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Clear one field's flag
    pub const fn clear(&mut self, field: Field) {
        self.set(field, false);
    }

    /// Whether any field is flagged
    pub const fn any(&self) -> bool {
        self.name || self.email || self.subject || self.message
    }

    /// Flagged fields in form order
    pub fn flagged(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.get(*f)).collect()
    }
}

/// Lifecycle of the current submit attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Nothing attempted yet
    #[default]
    Idle,
    /// Relay call in flight
    Submitting,
    /// Relay accepted the message
    Succeeded,
    /// Validation or relay failure
    Failed,
}

/// Rendering view of the submission state
///
/// `Invalid` is an `Idle` or `Failed` status with at least one field flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Ready, nothing attempted
    Idle,
    /// At least one field flagged
    Invalid,
    /// Relay call in flight
    Submitting,
    /// Message delivered
    Succeeded,
    /// Last attempt failed, no field flagged
    Failed,
}

/// Fields, error flags and status of one contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// Current field values
    pub fields: FormFields,
    /// Flags from the last validation pass
    pub errors: FieldErrors,
    /// Current submit lifecycle status
    pub status: SubmissionStatus,
}

impl SubmissionState {
    /// Derive the rendering phase
    pub const fn phase(&self) -> FormPhase {
        match self.status {
            SubmissionStatus::Submitting => FormPhase::Submitting,
            SubmissionStatus::Succeeded => FormPhase::Succeeded,
            _ if self.errors.any() => FormPhase::Invalid,
            SubmissionStatus::Failed => FormPhase::Failed,
            SubmissionStatus::Idle => FormPhase::Idle,
        }
    }
}

/// User event dispatched to the submission controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Field content changed
    Edit {
        /// Edited field
        field: Field,
        /// New content
        value: String,
    },
    /// Field gained focus, clearing its error flag
    ClearFieldError {
        /// Focused field
        field: Field,
    },
}

/// What a single `submit()` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was already in flight
    Ignored,
    /// Validation flagged at least one field
    Invalid(FieldErrors),
    /// Relay accepted the message
    Sent,
    /// Relay failed, rejected or timed out
    Failed,
}
