use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forwarder::ForwardSuccess;

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    #[schema(example = "success")]
    pub status: String,
    /// Body returned by the webhook, passed through unparsed.
    pub gas_response: String,
}

impl From<ForwardSuccess> for SubmitResponse {
    fn from(success: ForwardSuccess) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            gas_response: success.response,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}
