pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    gemini::GeminiClient,
    recommend::Recommender,
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route(
            "/recommend",
            post(handlers::recommend).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.gemini.api_key.is_none() {
        warn!("No Gemini API key configured; recommendation requests will fail");
    }

    let client = GeminiClient::new(&config.gemini);
    info!("Gemini client initialized (model: {})", client.model());

    let app_state = handlers::AppState {
        recommender: Arc::new(Recommender::new(Arc::new(client), &config.gemini)),
    };

    let app = router(app_state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
