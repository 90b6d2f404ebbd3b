//! Application error type mapping to the legacy JSON envelope.
//!
//! Every server-side failure -- validation included -- becomes
//! `500 {error: "Internal server error", message, success: false}`,
//! matching the surface the existing browser client expects.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hashtalk_types::chat::ErrorReply;
use hashtalk_types::error::AgentError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Failure from the agent request path.
    Agent(AgentError),
    /// Anything else that escapes a handler.
    Internal(String),
}

impl From<AgentError> for AppError {
    fn from(e: AgentError) -> Self {
        AppError::Agent(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Agent(e) => e.to_string(),
            AppError::Internal(msg) => msg,
        };

        let body = ErrorReply {
            error: "Internal server error".to_string(),
            message,
            success: false,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_envelope_shape() {
        let err = AppError::Agent(AgentError::InvalidRequest(
            "Missing required fields: sessionId, accountId, privateKey, message".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["success"], false);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("Missing required fields")
        );
    }
}
