//! Relay wire format
//!
//! The relay expects the contact payload serialized to a JSON string and
//! wrapped in a single `data` field:
//!
//! ```text
//! {"data": "{\"name\":\"Ada\",\"email\":\"ada@example.com\",...,\"access_key\":\"...\"}"}
//! ```

use crate::config::AccessKey;
use crate::error::Result;
use crate::types::FormFields;
use serde::Serialize;

/// Inner payload: the four fields plus the relay credential
#[derive(Serialize)]
pub struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    access_key: &'a str,
}

impl<'a> RelayPayload<'a> {
    /// Borrow the fields and key for encoding
    pub fn new(fields: &'a FormFields, access_key: &'a AccessKey) -> Self {
        Self {
            name: &fields.name,
            email: &fields.email,
            subject: &fields.subject,
            message: &fields.message,
            access_key: access_key.expose(),
        }
    }
}

/// Outer request body sent to the relay
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RelayEnvelope {
    /// Serialized [`RelayPayload`]
    pub data: String,
}

impl RelayEnvelope {
    /// Encode a payload into the wrapped form
    pub fn wrap(payload: &RelayPayload<'_>) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_string(payload)?,
        })
    }
}
