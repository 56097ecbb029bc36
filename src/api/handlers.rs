use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::instrument;
use utoipa::OpenApi;

use crate::{
    api::{
        dtos::{ErrorResponse, SubmitResponse},
        errors::ApiError,
    },
    app_state::AppState,
    form::{FieldSpec, FormConfig, ResolvedConfig},
    health::HealthResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(get_config, update_config, submit, crate::health::health_check),
    components(schemas(FormConfig, FieldSpec, SubmitResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "config", description = "Form configuration"),
        (name = "submit", description = "Submission forwarding"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Active form configuration. An environment override is returned exactly as
/// it was supplied.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "config",
    responses(
        (status = 200, description = "Active form configuration", body = FormConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ResolvedConfig> {
    Json(state.resolver.resolve())
}

/// Configuration is managed through the environment; writes always fail.
#[utoipa::path(
    post,
    path = "/api/config",
    tag = "config",
    responses(
        (status = 403, description = "Configuration is read-only", body = ErrorResponse)
    )
)]
pub async fn update_config() -> ApiError {
    ApiError::ReadOnlyConfig
}

#[utoipa::path(
    post,
    path = "/api/submit",
    tag = "submit",
    responses(
        (status = 200, description = "Webhook accepted the submission", body = SubmitResponse),
        (status = 400, description = "No webhook URL configured", body = ErrorResponse),
        (status = 500, description = "Webhook could not be reached", body = ErrorResponse)
    )
)]
#[instrument(name = "Submit check-in", skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(payload) = payload?;
    let success = state.forwarder.submit(&payload).await?;
    Ok(Json(success.into()))
}
