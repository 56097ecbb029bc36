use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info, info_span};

use crate::{
    api,
    app_state::AppState,
    config::{Config, ConfigProvider, EnvProvider},
    forwarder::WebhookClient,
    health::health_check,
    pages,
};

/// Wraps the listener and router so callers (tests in particular) can learn
/// which port was bound before the server starts.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the configured address and assemble the router, reading form
    /// configuration from the process environment.
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        Self::build_with_provider(config, Arc::new(EnvProvider)).await
    }

    pub async fn build_with_provider(
        config: Config,
        provider: Arc<dyn ConfigProvider>,
    ) -> anyhow::Result<Self> {
        let client = WebhookClient::from_config(&config)?;
        let state = AppState::new(provider, client);

        let listener = TcpListener::bind(config.bind_addr()).await?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: router(state, config.max_payload_bytes()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl-C is received.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

pub fn router(state: AppState, max_payload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin))
        .route("/api/config", get(api::get_config).post(api::update_config))
        .route("/api/submit", post(api::submit))
        .route("/healthz", get(health_check))
        .route("/api-docs/openapi.json", get(api::openapi_json))
        .layer(DefaultBodyLimit::max(max_payload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or_default();
                        info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, initiating graceful shutdown...");
}
