//! HTTP mail relay implementation

use crate::config::{AccessKey, RelayConfig};
use crate::error::{Error, Result};
use crate::relay::{MailRelay, RelayEnvelope, RelayPayload};
use crate::types::FormFields;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Mail relay reached over HTTP using reqwest
pub struct HttpMailRelay {
    client: Client,
    endpoint: Url,
    access_key: AccessKey,
}

impl HttpMailRelay {
    /// Create a relay client from configuration
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
        })
    }

    /// Request body that would be sent for these fields
    pub fn envelope(&self, fields: &FormFields) -> Result<RelayEnvelope> {
        RelayEnvelope::wrap(&RelayPayload::new(fields, &self.access_key))
    }
}

#[async_trait]
impl MailRelay for HttpMailRelay {
    async fn send(&self, fields: &FormFields) -> Result<()> {
        let body = self.envelope(fields)?;

        debug!("Posting contact message to {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!("Relay answered {status}");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::RelayStatus(status.as_u16()))
        }
    }
}
