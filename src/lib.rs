// Crew Relay - chat bot, task gateway and research/report agent crew

pub mod config;
pub mod models;
pub mod types;
pub mod agents;
pub mod llm;
pub mod relay;     // Telegram chat relay
pub mod routes;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use types::{AppError, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
