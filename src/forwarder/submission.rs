use serde_json::Value;
use tracing::{instrument, warn};

use crate::forwarder::{client::WebhookClient, errors::SubmitError};
use crate::form::ConfigResolver;

/// What the webhook answered, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardSuccess {
    pub response: String,
}

/// Relays form submissions to whatever webhook the active configuration names.
#[derive(Clone)]
pub struct SubmissionForwarder {
    resolver: ConfigResolver,
    client: WebhookClient,
}

impl SubmissionForwarder {
    pub fn new(resolver: ConfigResolver, client: WebhookClient) -> Self {
        Self { resolver, client }
    }

    /// Resolve the configuration and make a single attempt at delivering
    /// `payload`. Nothing is sent when no webhook URL is configured.
    #[instrument(name = "Forward submission", skip_all)]
    pub async fn submit(&self, payload: &Value) -> Result<ForwardSuccess, SubmitError> {
        let config = self.resolver.resolve();
        let Some(url) = config.webhook_url() else {
            warn!(
                source = config.source().as_str(),
                "submission received but no webhook URL is configured"
            );
            return Err(SubmitError::NotConfigured);
        };

        let response = self.client.post_json(&url, payload).await?;
        Ok(ForwardSuccess { response })
    }
}
