use axum::{Router, routing::get, Json, response::Json as ResponseJson};
use crate::models::HealthResponse;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/", get(health_check))
}

async fn health_check() -> ResponseJson<HealthResponse> {
    info!("Health check endpoint was called.");

    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
