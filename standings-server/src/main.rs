mod routes;
mod state;

use anyhow::{Context, Result};
use axum::Router;
use standings_core::{EventStore, StandingsConfig, logging};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = StandingsConfig::load()?;
    logging::init_subscriber(&config.log_level);

    let store = EventStore::new(config.events_path());
    info!(dir = %store.dir().display(), "serving events");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .with_state(AppState::new(store))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("standings-server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
