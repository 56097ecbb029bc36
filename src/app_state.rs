use crate::config::ConfigProvider;
use crate::form::ConfigResolver;
use crate::forwarder::{SubmissionForwarder, WebhookClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolver: ConfigResolver,
    pub forwarder: SubmissionForwarder,
}

impl AppState {
    pub fn new(provider: Arc<dyn ConfigProvider>, client: WebhookClient) -> Self {
        let resolver = ConfigResolver::new(provider);
        Self {
            forwarder: SubmissionForwarder::new(resolver.clone(), client),
            resolver,
        }
    }
}
