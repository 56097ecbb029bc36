use thiserror::Error;

/// Failure while relaying a submission to the webhook.
///
/// The `Display` text is handed to the form client as-is, so every variant
/// keeps the underlying transport message.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connect timeout: {0}")]
    ConnectTimeout(String),

    #[error("request timeout: {0}")]
    RequestTimeout(String),

    #[error("too many redirects: {0}")]
    RedirectLoop(String),

    #[error("webhook returned http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("failed to read webhook response: {0}")]
    Body(String),

    #[error("webhook response is not valid utf-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl ForwardError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout(err.to_string())
            } else {
                Self::RequestTimeout(err.to_string())
            }
        } else if err.is_redirect() {
            Self::RedirectLoop(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http { status }
        } else if err.is_connect() || err.is_request() {
            // DNS, refused connections, resets
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

/// Why a submission could not be forwarded.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Google Script URL not configured")]
    NotConfigured,

    #[error(transparent)]
    Forward(#[from] ForwardError),
}
