use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_webhook::config::ServerConfig;
use transit_webhook::gazetteer::london_stops;
use transit_webhook::tfl::TflClient;
use transit_webhook::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transit_webhook=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let client = TflClient::new(config.tfl())?;
    let gazetteer = london_stops();
    info!(stops = gazetteer.len(), "loaded stop gazetteer");

    let state = AppState::new(gazetteer, client);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, base_url = %config.base_url, "transit webhook listening");
    info!("POST /webhook        - agent webhook");
    info!("GET  /api/arrivals   - arrivals as JSON");
    info!("GET  /health         - health check");

    axum::serve(listener, app).await?;
    Ok(())
}
