use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::health::HealthChecker,
    config::Config,
    models::health::HealthStatus,
    operation::{self, OperationClients},
};

pub struct AppState {
    clients: OperationClients,
    health_checker: HealthChecker,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        Ok(Self {
            clients: OperationClients::new(&config)?,
            health_checker: HealthChecker::new(config),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/operations/goods-return", post(goods_return_operation))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "API server started");

    axum::serve(listener, app).await?;

    Ok(())
}

/// The operation endpoint never rejects: validation failures surface inside
/// the result structure, so the response is always 200 with a well-formed
/// per-channel outcome.
async fn goods_return_operation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    let data = payload.get("data").cloned().unwrap_or(Value::Null);
    let result = operation::run(&data, &state.clients).await;

    (StatusCode::OK, Json(result))
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all().await;

    let status_code = match health.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
