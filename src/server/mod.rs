pub mod handlers;

use crate::{Result, config::Config, inference::HttpInferenceClient};
use axum::{Router, routing::get};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", get(handlers::generate).post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = HttpInferenceClient::new(config.inference.clone());
    info!("Relaying generation requests to {}", client.endpoint());

    let app = build_router(AppState {
        inference: Arc::new(client),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
