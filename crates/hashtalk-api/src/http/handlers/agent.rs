//! Agent chat and session handlers.
//!
//! Endpoints:
//! - POST   /api/agent/chat                 - Chat with the tool agent
//! - DELETE /api/agent/session/{sessionId}  - Clear one session memory
//! - DELETE /api/agent/sessions             - Clear all session memories

use axum::Json;
use axum::extract::{Path, State};

use hashtalk_types::chat::{ChatReply, ChatRequest, ClearAllReply, ClearSessionReply};

use crate::http::error::AppError;
use crate::http::extract::ApiJson;
use crate::state::AppState;

/// POST /api/agent/chat - Run one chat turn against the tool agent.
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = state.service.chat(request).await?;
    Ok(Json(reply))
}

/// DELETE /api/agent/session/{sessionId} - Clear one session memory.
///
/// Succeeds whether or not the session exists; `cleared` tells which.
pub async fn clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ClearSessionReply> {
    let cleared = state.service.clear_session(&session_id);
    let message = if cleared {
        "Session memory cleared"
    } else {
        "Session not found"
    };

    Json(ClearSessionReply {
        success: true,
        cleared,
        message: message.to_string(),
    })
}

/// DELETE /api/agent/sessions - Clear every session memory.
pub async fn clear_all_sessions(State(state): State<AppState>) -> Json<ClearAllReply> {
    state.service.clear_all_sessions();
    Json(ClearAllReply {
        success: true,
        message: "All session memories cleared".to_string(),
    })
}
