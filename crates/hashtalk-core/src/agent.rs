//! Agent service: request validation, session memory, agent dispatch.
//!
//! `AgentService` is the request-handling core behind the HTTP layer.
//! It owns the session registry, validates inbound requests before any
//! external call is made, and drives exactly one `ToolAgent` invocation
//! per chat turn. The agent itself (LLM plus toolkit) is a seam --
//! implementations live in hashtalk-infra.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use hashtalk_types::chat::{ChatReply, ChatRequest, ConversationTurn};
use hashtalk_types::error::AgentError;
use hashtalk_types::tool::OperatorCredentials;

use crate::session::SessionRegistry;

/// One-shot tool-calling agent: given credentials, prior turns, and a
/// message, produce a single textual output.
///
/// The agent internally decides which tools to invoke; callers never
/// see intermediate steps.
#[async_trait]
pub trait ToolAgent: Send + Sync {
    async fn chat(
        &self,
        operator: &OperatorCredentials,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<String, AgentError>;
}

/// Validation message for the legacy surface; listed in wire-field order.
const MISSING_FIELDS: &str =
    "Missing required fields: sessionId, accountId, privateKey, message";

/// Orchestrates chat requests: validate, resolve memory, invoke agent,
/// record the completed turn.
pub struct AgentService {
    registry: Arc<SessionRegistry>,
    agent: Arc<dyn ToolAgent>,
}

impl AgentService {
    /// Create a new agent service over the given registry and agent.
    pub fn new(registry: Arc<SessionRegistry>, agent: Arc<dyn ToolAgent>) -> Self {
        Self { registry, agent }
    }

    /// Access the session registry.
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Handle one chat turn.
    ///
    /// Fails fast with `InvalidRequest` before any external call if a
    /// required field is missing. On agent failure the error is
    /// surfaced as-is and the session memory is left untouched; the
    /// turn is recorded only after a successful invocation.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply, AgentError> {
        validate(&request)?;

        let memory = self.registry.get_or_create(&request.session_id);
        // Snapshot before the await; the guard must not cross it.
        let history = memory.turns();

        let operator = OperatorCredentials {
            account_id: request.account_id.clone(),
            private_key: request.private_key.clone(),
        };

        info!(
            session = %request.session_id,
            account = %request.account_id,
            turns = history.len(),
            "dispatching chat turn"
        );

        let output = self
            .agent
            .chat(&operator, &history, &request.message)
            .await
            .inspect_err(|e| {
                warn!(session = %request.session_id, error = %e, "agent invocation failed");
            })?;

        memory.record(request.message, output.clone());

        Ok(ChatReply {
            session_id: request.session_id,
            response: output,
            success: true,
        })
    }

    /// Discard the memory for one session; returns whether it existed.
    pub fn clear_session(&self, session_id: &str) -> bool {
        self.registry.remove(session_id)
    }

    /// Discard every session memory.
    pub fn clear_all_sessions(&self) {
        self.registry.clear();
    }
}

/// Reject the request if any required field is missing or empty.
fn validate(request: &ChatRequest) -> Result<(), AgentError> {
    if request.session_id.is_empty()
        || request.account_id.is_empty()
        || request.private_key.is_empty()
        || request.message.is_empty()
    {
        return Err(AgentError::InvalidRequest(MISSING_FIELDS.to_string()));
    }
    Ok(())
}
