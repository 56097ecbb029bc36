use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::dtos::ErrorResponse;
use crate::forwarder::SubmitError;

pub const READ_ONLY_MESSAGE: &str = "Configuration is read-only. Update the APP_CONFIG or GAS_URL environment variables instead.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", READ_ONLY_MESSAGE)]
    ReadOnlyConfig,

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("{message}")]
    InvalidPayload { status: StatusCode, message: String },

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ReadOnlyConfig => StatusCode::FORBIDDEN,
            ApiError::Submit(SubmitError::NotConfigured) => StatusCode::BAD_REQUEST,
            ApiError::Submit(SubmitError::Forward(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidPayload { status, .. } => *status,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, %status, "request rejected");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forwarder::ForwardError;

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(ApiError::ReadOnlyConfig.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(SubmitError::NotConfigured).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(SubmitError::from(ForwardError::Connect("refused".into())))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InvalidPayload {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: "nope".into()
            }
            .status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[tokio::test]
    async fn renders_structured_body() {
        let response = ApiError::ReadOnlyConfig.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.message, READ_ONLY_MESSAGE);
    }
}
