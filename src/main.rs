use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use crew_relay::agents::{AgentRoster, Crew};
use crew_relay::{config::Config, routes::create_router, utils::init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("crew_relay=debug,tower_http=debug,axum=debug");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);
    if config.llm.active_api_key().is_none() {
        // Tasks will be rejected until the key is provided
        tracing::warn!("{} is not set; task submissions will fail", config.llm.api_key_var());
    }

    // Agents live for the whole process and are shared read-only
    let roster = Arc::new(AgentRoster::new());
    let crew = Crew::new(roster, config.llm.clone());
    let state = AppState::new(Arc::new(crew));

    let app = create_router(state);

    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid HOST {:?}: {}", config.server.host, e))?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("API Gateway starting up...");
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("API Gateway shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
