use std::net::SocketAddr;

use tracing::info;

use ferry_planner::planner::PlannerConfig;
use ferry_planner::transport::{TransportClient, TransportConfig};
use ferry_planner::web::{AppState, create_router};

/// Static assets, relative to the crate root.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[tokio::main]
async fn main() {
    ferry_planner::logging::init("ferry_planner=info,warn");

    if let Err(e) = serve().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let transport = TransportClient::new(TransportConfig::default())?;
    let config = PlannerConfig::web_table();

    info!(from = %config.from, to = %config.to, "serving ferry table");

    let state = AppState::new(transport, config);
    let app = create_router(state, STATIC_DIR);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Ferry planner listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /              - Ferry table (HTML)");
    println!("  GET  /api/ferries   - Ferry table (JSON)");
    println!("  GET  /health        - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
