//! HTTP client for the Hashtalk agent API.
//!
//! Mirrors the browser client's surface: chat, clear one session,
//! clear all sessions. Server-side failures arrive as the legacy error
//! envelope and are surfaced with their `message`; transport failures
//! map to [`ClientError::Network`]. No retries.
//!
//! Re-exports the reply post-processor from hashtalk-core so callers
//! can extract the HashScan link and token/transaction ids for display.

use thiserror::Error;
use uuid::Uuid;

use hashtalk_types::chat::{ChatReply, ChatRequest, ClearAllReply, ClearSessionReply, ErrorReply};

pub use hashtalk_core::reply::{ParsedReply, parse_reply, strip_tool_markup};

/// Default backend base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Errors from the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with an error envelope.
    #[error("{message}")]
    Api { message: String },

    /// The backend was unreachable or the transport failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the agent HTTP API.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for AgentClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AgentClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Send one chat turn.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        let url = format!("{}/api/agent/chat", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// Clear one session's memory.
    pub async fn clear_session(
        &self,
        session_id: &str,
    ) -> Result<ClearSessionReply, ClientError> {
        let url = format!("{}/api/agent/session/{session_id}", self.base_url);
        let response = self.http.delete(&url).send().await?;
        decode(response).await
    }

    /// Clear every session's memory.
    pub async fn clear_all_sessions(&self) -> Result<ClearAllReply, ClientError> {
        let url = format!("{}/api/agent/sessions", self.base_url);
        let response = self.http.delete(&url).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or surface the error envelope's message.
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if response.status().is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = match response.json::<ErrorReply>().await {
        Ok(envelope) => envelope.message,
        Err(_) => "Failed to communicate with agent".to_string(),
    };
    Err(ClientError::Api { message })
}

/// Generate an opaque session key for a new conversation thread.
///
/// Keys are caller-generated; the backend treats them as opaque.
pub fn generate_session_key() -> String {
    format!("user_{}", Uuid::now_v7().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ChatRequest {
        ChatRequest {
            session_id: "user_1".to_string(),
            account_id: "0.0.1001".to_string(),
            private_key: "302e0201".to_string(),
            message: "create a token".to_string(),
        }
    }

    #[tokio::test]
    async fn test_chat_decodes_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/agent/chat"))
            .and(body_partial_json(json!({"sessionId": "user_1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sessionId": "user_1",
                "response": "Done! https://hashscan.io/testnet/account/0.0.1001/operations",
                "success": true
            })))
            .mount(&server)
            .await;

        let client = AgentClient::new(server.uri());
        let reply = client.chat(&request()).await.unwrap();
        assert!(reply.success);

        let parsed = parse_reply(&reply.response);
        assert_eq!(
            parsed.hashscan_link.as_deref(),
            Some("https://hashscan.io/testnet/account/0.0.1001/operations")
        );
    }

    #[tokio::test]
    async fn test_error_envelope_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/agent/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "Internal server error",
                "message": "provider unavailable",
                "success": false
            })))
            .mount(&server)
            .await;

        let client = AgentClient::new(server.uri());
        let err = client.chat(&request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { .. }));
        assert_eq!(err.to_string(), "provider unavailable");
    }

    #[tokio::test]
    async fn test_clear_session_decodes_reply() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/agent/session/user_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "cleared": true,
                "message": "Session memory cleared"
            })))
            .mount(&server)
            .await;

        let client = AgentClient::new(server.uri());
        let reply = client.clear_session("user_1").await.unwrap();
        assert!(reply.cleared);
    }

    #[tokio::test]
    async fn test_clear_all_sessions_decodes_reply() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/agent/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "All session memories cleared"
            })))
            .mount(&server)
            .await;

        let client = AgentClient::new(server.uri());
        let reply = client.clear_all_sessions().await.unwrap();
        assert!(reply.success);
    }

    #[test]
    fn test_session_keys_are_unique_and_prefixed() {
        let a = generate_session_key();
        let b = generate_session_key();
        assert!(a.starts_with("user_"));
        assert_ne!(a, b);
    }
}
