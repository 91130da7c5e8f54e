use super::{
    page,
    types::{ChatRequest, ChatResponse, ErrorResponse, ModelResponse, TranscriptResponse},
};
use crate::{Error, chat::ChatService, history::SessionStore};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub chat: ChatService,
    pub endpoint: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: Error) -> ApiError {
    let status = match e {
        Error::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

pub async fn model(State(state): State<AppState>) -> Json<ModelResponse> {
    Json(ModelResponse {
        model: state.chat.model_name(),
        endpoint: state.endpoint.clone(),
    })
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.input.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "input must not be empty".to_string(),
            }),
        ));
    }

    let (session_id, session) = match request.session_id.as_deref() {
        Some(raw) => state.sessions.resolve(raw),
        None => state.sessions.create(),
    }
    .map_err(api_error)?;

    info!("Received chat input for session: {}", session_id);

    // Runs detached so a client disconnect cannot leave an unanswered turn.
    match state.chat.submit(session, request.input).await {
        Ok(reply) => Ok(Json(ChatResponse {
            session_id: session_id.to_string(),
            reply,
        })),
        Err(e) => {
            error!("Failed to process input for session {}: {}", session_id, e);
            Err(api_error(e))
        }
    }
}

pub async fn messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let (id, session) = state.sessions.resolve(&session_id).map_err(api_error)?;
    let messages = session.lock().await.all().to_vec();

    Ok(Json(TranscriptResponse {
        session_id: id.to_string(),
        messages,
    }))
}
