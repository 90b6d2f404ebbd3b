//! Application state wiring the agent service together.
//!
//! AppState owns the one `AgentService` instance shared by every
//! request; the session registry lives inside it for the lifetime of
//! the process.

use std::sync::Arc;

use hashtalk_core::agent::{AgentService, ToolAgent};
use hashtalk_core::session::SessionRegistry;
use hashtalk_infra::llm::groq::GroqAgent;
use hashtalk_infra::toolkit::AgentKitBridge;

use crate::config::Config;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AgentService>,
}

impl AppState {
    /// Wire the production stack: Groq agent over the agent-kit bridge.
    pub fn new(config: &Config) -> Self {
        let toolkit = Arc::new(AgentKitBridge::new(config.agent_kit_url.clone()));
        let agent = GroqAgent::new(
            config.groq_api_key.clone(),
            config.model.clone(),
            toolkit,
        );
        Self::with_agent(Arc::new(agent))
    }

    /// Build state over an arbitrary agent (tests inject stubs here).
    pub fn with_agent(agent: Arc<dyn ToolAgent>) -> Self {
        let registry = Arc::new(SessionRegistry::new());
        Self {
            service: Arc::new(AgentService::new(registry, agent)),
        }
    }
}
