pub mod handlers;
mod page;
pub mod types;

use crate::{
    Result,
    chat::ChatService,
    config::Config,
    history::SessionStore,
    llm::{HuggingFaceClient, LlmClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/model", get(handlers::model))
        .route("/api/chat", post(handlers::chat))
        .route("/api/sessions/:session_id/messages", get(handlers::messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn app_state(llm_client: Arc<dyn LlmClient>, endpoint: impl Into<String>) -> AppState {
    AppState {
        sessions: Arc::new(SessionStore::new()),
        chat: ChatService::new(llm_client),
        endpoint: endpoint.into(),
    }
}

pub async fn run(config: Config) -> Result<()> {
    let client = HuggingFaceClient::new(config.inference.clone())?;
    info!("Using model: {}", client.model_name());

    let app = router(app_state(Arc::new(client), config.inference.endpoint.clone()));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
