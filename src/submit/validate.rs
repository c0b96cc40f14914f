//! Field validation
//!
//! Pure checks run by the controller on every submit.

use crate::types::{Field, FieldErrors, FormFields};
use regex::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_DOMAIN_LABEL_LEN: usize = 63;

// local-part: dot-separated atext atoms; domain: labels with a final
// alphabetic-led label of two or more characters
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~](\.?[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~])*@[a-zA-Z0-9](-*\.?[a-zA-Z0-9])*\.[a-zA-Z](-?[a-zA-Z0-9])+$",
    )
    .expect("hardcoded email pattern is valid")
});

/// Check an address against the email grammar
///
/// Syntax only: no DNS lookup, no mailbox check.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }

    if domain
        .split('.')
        .any(|label| label.len() > MAX_DOMAIN_LABEL_LEN)
    {
        return false;
    }

    EMAIL_RE.is_match(email)
}

/// Whether a single field's content is acceptable
///
/// Text fields only need to be non-empty; whitespace counts as content.
pub fn is_field_valid(field: Field, value: &str) -> bool {
    match field {
        Field::Email => is_valid_email(value),
        Field::Name | Field::Subject | Field::Message => !value.is_empty(),
    }
}

/// Validate every field, flagging the ones that fail
pub fn validate_form(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, !is_field_valid(field, fields.get(field)));
    }
    errors
}
