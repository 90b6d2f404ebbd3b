//! HTTP bridge to the external agent-kit service.
//!
//! The blockchain SDK (key parsing, transaction construction, network
//! I/O) stays in the agent-kit service; this bridge forwards tool
//! invocations to it and relays the textual output back to the model.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use hashtalk_core::toolkit::{Toolkit, catalogue};
use hashtalk_types::error::AgentError;
use hashtalk_types::tool::{OperatorCredentials, ToolDescriptor};

/// Request body sent to the agent-kit service for one tool invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeRequest<'a> {
    tool: &'a str,
    arguments: &'a Value,
    account_id: &'a str,
    private_key: &'a str,
}

/// Success body returned by the agent-kit service.
#[derive(Debug, Deserialize)]
struct InvokeReply {
    output: String,
}

/// Error body returned by the agent-kit service.
#[derive(Debug, Deserialize)]
struct InvokeError {
    message: String,
}

/// [`Toolkit`] implementation that POSTs invocations to the agent-kit
/// service at `{base_url}/invoke`.
///
/// Exposes the full fixed catalogue (the service's empty-selection
/// convention: all tools are available).
pub struct AgentKitBridge {
    client: reqwest::Client,
    base_url: String,
}

impl AgentKitBridge {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self { client, base_url }
    }
}

#[async_trait]
impl Toolkit for AgentKitBridge {
    fn descriptors(&self) -> Vec<ToolDescriptor> {
        catalogue()
    }

    async fn invoke(
        &self,
        name: &str,
        arguments: Value,
        operator: &OperatorCredentials,
    ) -> Result<String, AgentError> {
        let url = format!("{}/invoke", self.base_url);
        let body = InvokeRequest {
            tool: name,
            arguments: &arguments,
            account_id: &operator.account_id,
            private_key: &operator.private_key,
        };

        debug!(tool = %name, "forwarding tool invocation");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Agent(format!("agent-kit unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<InvokeError>().await {
                Ok(err) => err.message,
                Err(_) => format!("agent-kit returned status {status}"),
            };
            return Err(AgentError::Agent(message));
        }

        let reply = response
            .json::<InvokeReply>()
            .await
            .map_err(|e| AgentError::Agent(format!("invalid agent-kit reply: {e}")))?;

        Ok(reply.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn operator() -> OperatorCredentials {
        OperatorCredentials {
            account_id: "0.0.1001".to_string(),
            private_key: "302e0201".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invoke_forwards_and_returns_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoke"))
            .and(body_partial_json(json!({
                "tool": "TRANSFER_HBAR_TOOL",
                "accountId": "0.0.1001"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": "{\"status\": \"SUCCESS\"}"
            })))
            .mount(&server)
            .await;

        let bridge = AgentKitBridge::new(server.uri());
        let output = bridge
            .invoke(
                "TRANSFER_HBAR_TOOL",
                json!({"to": "0.0.1002", "amount": 1}),
                &operator(),
            )
            .await
            .unwrap();
        assert!(output.contains("SUCCESS"));
    }

    #[tokio::test]
    async fn test_error_status_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoke"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "invalid private key"
            })))
            .mount(&server)
            .await;

        let bridge = AgentKitBridge::new(server.uri());
        let err = bridge
            .invoke("TRANSFER_HBAR_TOOL", json!({}), &operator())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid private key"));
    }

    #[test]
    fn test_bridge_exposes_full_catalogue() {
        let bridge = AgentKitBridge::new("http://localhost:9090".to_string());
        assert_eq!(bridge.descriptors().len(), catalogue().len());
    }
}
