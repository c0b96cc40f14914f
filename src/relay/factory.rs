//! Mail relay factory
//!
//! Creates the relay client from configuration.

use crate::config::RelayConfig;
use crate::error::Result;
use crate::relay::HttpMailRelay;
use std::sync::Arc;

/// Create a mail relay from configuration
///
/// The client is shared with the submission controller, hence the `Arc`.
pub fn create_mail_relay(config: &RelayConfig) -> Result<Arc<HttpMailRelay>> {
    Ok(Arc::new(HttpMailRelay::new(config)?))
}
