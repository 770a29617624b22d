//! API Routes
//!
//! HTTP endpoints of the gateway:
//! - `/` - Health check
//! - `/tasks/` - Task intake (runs the crew and answers with a receipt)

pub mod health;
pub mod tasks;

use axum::Router;
use crate::models::AppState;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the gateway router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(health::router())
        .merge(tasks::router(state))
        .layer(TraceLayer::new_for_http())
}
