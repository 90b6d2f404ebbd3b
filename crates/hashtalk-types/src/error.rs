use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced by the agent request path.
///
/// Both variants map to the same HTTP 500 envelope at the API boundary
/// (the legacy surface never distinguished them).
#[derive(Debug, Error)]
pub enum AgentError {
    /// A required request field was missing or empty. Raised before any
    /// external call is made.
    #[error("{0}")]
    InvalidRequest(String),

    /// The LLM or tool-execution layer failed; carries the original
    /// provider message.
    #[error("{0}")]
    Agent(String),
}

impl From<LlmError> for AgentError {
    fn from(e: LlmError) -> Self {
        AgentError::Agent(e.to_string())
    }
}
