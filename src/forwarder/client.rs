use reqwest::{Client, ClientBuilder, header::CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{Span, info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::forwarder::errors::ForwardError;

const USER_AGENT: &str = concat!("checkin/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Thin wrapper around a `reqwest::Client` that posts JSON to the webhook.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
}

impl WebhookClient {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self, ForwardError> {
        let http = ClientBuilder::new()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            // Apps Script answers a POST with a redirect to the result page.
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(ForwardError::from_reqwest_error)?;
        Ok(Self { http })
    }

    pub fn from_config(config: &Config) -> Result<Self, ForwardError> {
        Self::new(config.webhook_connect_timeout(), config.webhook_timeout())
    }

    /// POST `payload` to `url` once and return the response body as text.
    ///
    /// Non-2xx answers are errors. The body is not interpreted in any way.
    #[instrument(name = "Post to webhook", skip_all, fields(host = tracing::field::Empty))]
    pub async fn post_json(&self, url: &str, payload: &Value) -> Result<String, ForwardError> {
        let target = Url::parse(url)?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(ForwardError::UnsupportedScheme(target.scheme().to_string()));
        }
        Span::current().record("host", target.host_str().unwrap_or_default());

        let body = serde_json::to_vec(payload)?;

        let response = self
            .http
            .post(target)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ForwardError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "webhook rejected submission");
            return Err(ForwardError::Http { status });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ForwardError::Body(e.to_string()))?;
        let text = String::from_utf8(bytes.to_vec())?;

        info!(%status, bytes = text.len(), "webhook accepted submission");
        Ok(text)
    }
}
