//! GroqAgent -- [`ToolAgent`] implementation over Groq's
//! OpenAI-compatible chat-completions API.
//!
//! One agent invocation runs a bounded tool loop: build the message
//! list from the system prompt, the session history, and the new user
//! message; while the model answers with tool calls, dispatch each
//! through the [`Toolkit`] and feed the results back; stop at the first
//! plain-text answer.

pub mod types;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};

use hashtalk_core::agent::ToolAgent;
use hashtalk_core::prompt::SYSTEM_PROMPT;
use hashtalk_core::toolkit::Toolkit;
use hashtalk_types::chat::ConversationTurn;
use hashtalk_types::error::AgentError;
use hashtalk_types::llm::LlmError;
use hashtalk_types::tool::OperatorCredentials;

use self::types::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, WireMessage, WireTool,
};

/// Upper bound on LLM round-trips per invocation; past this the
/// conversation is aborted rather than looping forever.
const MAX_TOOL_ITERATIONS: usize = 10;

/// Tool-calling agent backed by the Groq chat-completions API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the Authorization header. The struct intentionally does
/// not derive Debug.
pub struct GroqAgent {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    toolkit: Arc<dyn Toolkit>,
}

impl GroqAgent {
    const DEFAULT_BASE_URL: &'static str = "https://api.groq.com/openai/v1";

    /// Create a new agent for the given model and toolkit.
    pub fn new(api_key: SecretString, model: String, toolkit: Arc<dyn Toolkit>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model,
            toolkit,
        }
    }

    /// Override the base URL (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Send one completion request and parse the response.
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LlmError::AuthenticationFailed);
        }
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("unexpected status {status}"),
            };
            return Err(LlmError::Provider { message });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::Deserialization(e.to_string()))
    }

    /// Seed the message list for one invocation.
    fn build_messages(&self, history: &[ConversationTurn], message: &str) -> Vec<WireMessage> {
        let mut messages = Vec::with_capacity(history.len() * 2 + 2);
        messages.push(WireMessage::text("system", SYSTEM_PROMPT));
        for turn in history {
            messages.push(WireMessage::text("user", &turn.human));
            messages.push(WireMessage::text("assistant", &turn.agent));
        }
        messages.push(WireMessage::text("user", message));
        messages
    }
}

#[async_trait]
impl ToolAgent for GroqAgent {
    async fn chat(
        &self,
        operator: &OperatorCredentials,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<String, AgentError> {
        let mut messages = self.build_messages(history, message);
        let tools: Vec<WireTool> = self
            .toolkit
            .descriptors()
            .into_iter()
            .map(WireTool::from)
            .collect();

        for iteration in 0..MAX_TOOL_ITERATIONS {
            let request = ChatCompletionRequest {
                model: self.model.clone(),
                messages: messages.clone(),
                tools: (!tools.is_empty()).then(|| tools.clone()),
                temperature: None,
            };

            let response = self.complete(&request).await?;
            let choice = response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| LlmError::Deserialization("response had no choices".to_string()))?;

            let tool_calls = choice.message.tool_calls.clone().unwrap_or_default();
            if tool_calls.is_empty() {
                return Ok(choice.message.content.unwrap_or_default());
            }

            debug!(
                iteration,
                calls = tool_calls.len(),
                "model requested tool calls"
            );
            messages.push(choice.message);

            for call in tool_calls {
                let arguments: Value = serde_json::from_str(&call.function.arguments)
                    .unwrap_or_else(|_| Value::Object(Default::default()));

                // Execution failures are fed back to the model as tool
                // output so it can recover or report them.
                let output = match self
                    .toolkit
                    .invoke(&call.function.name, arguments, operator)
                    .await
                {
                    Ok(output) => output,
                    Err(e) => {
                        warn!(tool = %call.function.name, error = %e, "tool invocation failed");
                        format!("Error: {e}")
                    }
                };
                messages.push(WireMessage::tool_result(call.id, output));
            }
        }

        Err(AgentError::Agent(format!(
            "tool loop exceeded {MAX_TOOL_ITERATIONS} iterations without a final answer"
        )))
    }
}
