//! Chat wire types for the agent HTTP surface.
//!
//! Field names are camelCase on the wire for compatibility with the
//! existing browser client; every reply carries an explicit `success`
//! flag alongside its payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An inbound chat request.
///
/// All four fields are required; an omitted field deserializes to the
/// empty string so validation can reject it with the legacy message
/// instead of a deserialization error. The session key is
/// caller-generated and opaque -- collision risk is the caller's
/// responsibility.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    pub session_id: String,
    pub account_id: String,
    pub private_key: String,
    pub message: String,
}

// Manual Debug so the operator private key never lands in logs.
impl fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatRequest")
            .field("session_id", &self.session_id)
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .field("message", &self.message)
            .finish()
    }
}

/// A successful chat reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub session_id: String,
    pub response: String,
    pub success: bool,
}

/// Reply to a single-session clear.
///
/// `cleared` reports whether the session existed; the request succeeds
/// either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearSessionReply {
    pub success: bool,
    pub cleared: bool,
    pub message: String,
}

/// Reply to a clear-all request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearAllReply {
    pub success: bool,
    pub message: String,
}

/// The uniform error envelope returned for every server-side failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
    pub message: String,
    pub success: bool,
}

/// One completed conversation turn: a human message and the agent's
/// answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub human: String,
    pub agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_names() {
        let json = r#"{
            "sessionId": "user_1",
            "accountId": "0.0.1001",
            "privateKey": "302e0201...",
            "message": "what is my balance?"
        }"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.session_id, "user_1");
        assert_eq!(req.account_id, "0.0.1001");
        assert_eq!(req.message, "what is my balance?");
    }

    #[test]
    fn test_chat_request_omitted_fields_default_to_empty() {
        // Bodies missing required fields must still deserialize so the
        // handler can reject them with the legacy validation message.
        let req: ChatRequest = serde_json::from_str(r#"{"sessionId": "user_1"}"#).unwrap();
        assert_eq!(req.session_id, "user_1");
        assert!(req.account_id.is_empty());
        assert!(req.private_key.is_empty());
        assert!(req.message.is_empty());
    }

    #[test]
    fn test_chat_reply_wire_names() {
        let reply = ChatReply {
            session_id: "user_1".to_string(),
            response: "Done!".to_string(),
            success: true,
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("\"sessionId\":\"user_1\""));
        assert!(json.contains("\"success\":true"));
    }

    #[test]
    fn test_chat_request_debug_redacts_private_key() {
        let req = ChatRequest {
            session_id: "s".to_string(),
            account_id: "0.0.1".to_string(),
            private_key: "supersecret".to_string(),
            message: "hi".to_string(),
        };
        let debug = format!("{req:?}");
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_error_reply_shape() {
        let reply = ErrorReply {
            error: "Internal server error".to_string(),
            message: "boom".to_string(),
            success: false,
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("\"error\":\"Internal server error\""));
        assert!(json.contains("\"success\":false"));
    }
}
