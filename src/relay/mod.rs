//! Remote mail relay
//!
//! The relay accepts the contact payload over HTTP and forwards it as an
//! email. Its internals are opaque; only the success signal matters.

mod factory;
mod http;
mod payload;

pub use factory::create_mail_relay;
pub use http::HttpMailRelay;
pub use payload::{RelayEnvelope, RelayPayload};

use crate::error::Result;
use crate::types::FormFields;
use async_trait::async_trait;

/// Mail relay trait
///
/// `Ok(())` is the success signal. Every error is treated the same way by
/// the submission controller.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver one contact message
    async fn send(&self, fields: &FormFields) -> Result<()>;
}
