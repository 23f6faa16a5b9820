use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use zone_server::controller::LookupController;
use zone_server::lookup::{LookupClient, LookupConfig};
use zone_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Zone-lookup service base URL from environment
    let mut config = LookupConfig::new();
    match std::env::var("ZONE_API_BASE_URL") {
        Ok(base_url) => config = config.with_base_url(base_url),
        Err(_) => eprintln!(
            "Warning: ZONE_API_BASE_URL not set. Using {}.",
            config.base_url
        ),
    }

    let client = LookupClient::new(config).expect("Failed to create lookup client");
    tracing::info!(base_url = client.base_url(), "using zone-lookup service");

    let controller = LookupController::new(client);
    let state = AppState::new(controller);
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("London Zone Finder listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health  - Health check");
    println!("  POST /lookup  - Look up the zone for a postcode");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
