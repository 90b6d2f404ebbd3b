//! Blockchain toolkit seam and the fixed Hedera tool catalogue.
//!
//! The toolkit itself (transaction construction, signing, network I/O)
//! is an external collaborator; this module only defines the trait the
//! agent dispatches through and the catalogue of tool descriptors the
//! LLM is offered. External contract honored throughout: selecting an
//! empty tool list loads ALL available tools.

use async_trait::async_trait;
use serde_json::{Value, json};

use hashtalk_types::error::AgentError;
use hashtalk_types::tool::{OperatorCredentials, ToolDescriptor};

/// Executes named tools against the Hedera network on behalf of an
/// operator account.
///
/// Implementations live in hashtalk-infra. The agent converts execution
/// failures into tool-result text for the LLM rather than aborting the
/// conversation, so `invoke` errors are recoverable.
#[async_trait]
pub trait Toolkit: Send + Sync {
    /// The tools this toolkit exposes to the LLM.
    fn descriptors(&self) -> Vec<ToolDescriptor>;

    /// Execute one tool with JSON arguments under the given credentials.
    ///
    /// Returns the tool output as a string (the LLM reads this).
    async fn invoke(
        &self,
        name: &str,
        arguments: Value,
        operator: &OperatorCredentials,
    ) -> Result<String, AgentError>;
}

fn account_param(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

/// The full fixed catalogue of Hedera tools.
///
/// Token service, account, consensus, and query tools -- mirroring the
/// toolkit's published surface. Order is stable.
pub fn catalogue() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "CREATE_FUNGIBLE_TOKEN_TOOL",
            "Create a fungible token on the Hedera Token Service",
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Token name"},
                    "symbol": {"type": "string", "description": "Token symbol"},
                    "initialSupply": {"type": "integer", "description": "Initial supply in base units"},
                    "decimals": {"type": "integer", "description": "Number of decimal places"}
                },
                "required": ["name", "symbol"]
            }),
        ),
        ToolDescriptor::new(
            "CREATE_NON_FUNGIBLE_TOKEN_TOOL",
            "Create an NFT collection on the Hedera Token Service",
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Collection name"},
                    "symbol": {"type": "string", "description": "Collection symbol"},
                    "maxSupply": {"type": "integer", "description": "Maximum number of serials"}
                },
                "required": ["name", "symbol"]
            }),
        ),
        ToolDescriptor::new(
            "AIRDROP_FUNGIBLE_TOKEN_TOOL",
            "Airdrop a fungible token to one or more accounts",
            json!({
                "type": "object",
                "properties": {
                    "tokenId": {"type": "string", "description": "Token to airdrop, e.g. 0.0.5005"},
                    "recipients": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "accountId": account_param("Recipient account"),
                                "amount": {"type": "integer", "description": "Amount in base units"}
                            },
                            "required": ["accountId", "amount"]
                        }
                    }
                },
                "required": ["tokenId", "recipients"]
            }),
        ),
        ToolDescriptor::new(
            "MINT_FUNGIBLE_TOKEN_TOOL",
            "Mint additional supply of an existing fungible token",
            json!({
                "type": "object",
                "properties": {
                    "tokenId": {"type": "string", "description": "Token to mint, e.g. 0.0.5005"},
                    "amount": {"type": "integer", "description": "Amount to mint in base units"}
                },
                "required": ["tokenId", "amount"]
            }),
        ),
        ToolDescriptor::new(
            "MINT_NON_FUNGIBLE_TOKEN_TOOL",
            "Mint NFTs into an existing collection",
            json!({
                "type": "object",
                "properties": {
                    "tokenId": {"type": "string", "description": "Collection token id"},
                    "metadata": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Metadata for each serial to mint"
                    }
                },
                "required": ["tokenId"]
            }),
        ),
        ToolDescriptor::new(
            "TRANSFER_HBAR_TOOL",
            "Transfer HBAR between accounts",
            json!({
                "type": "object",
                "properties": {
                    "to": account_param("Recipient account, e.g. 0.0.1002"),
                    "amount": {"type": "number", "description": "Amount of HBAR to transfer"}
                },
                "required": ["to", "amount"]
            }),
        ),
        ToolDescriptor::new(
            "CREATE_TOPIC_TOOL",
            "Create a consensus service topic",
            json!({
                "type": "object",
                "properties": {
                    "memo": {"type": "string", "description": "Topic memo"}
                },
                "required": []
            }),
        ),
        ToolDescriptor::new(
            "SUBMIT_TOPIC_MESSAGE_TOOL",
            "Submit a message to a consensus service topic",
            json!({
                "type": "object",
                "properties": {
                    "topicId": {"type": "string", "description": "Topic id, e.g. 0.0.7007"},
                    "message": {"type": "string", "description": "Message payload"}
                },
                "required": ["topicId", "message"]
            }),
        ),
        ToolDescriptor::new(
            "GET_HBAR_BALANCE_QUERY_TOOL",
            "Get the HBAR balance of an account",
            json!({
                "type": "object",
                "properties": {
                    "accountId": account_param("Account to query; defaults to the operator")
                },
                "required": []
            }),
        ),
        ToolDescriptor::new(
            "GET_ACCOUNT_QUERY_TOOL",
            "Get information about an account",
            json!({
                "type": "object",
                "properties": {
                    "accountId": account_param("Account to query")
                },
                "required": ["accountId"]
            }),
        ),
        ToolDescriptor::new(
            "GET_ACCOUNT_TOKEN_BALANCES_QUERY_TOOL",
            "Get the token balances held by an account",
            json!({
                "type": "object",
                "properties": {
                    "accountId": account_param("Account to query; defaults to the operator")
                },
                "required": []
            }),
        ),
        ToolDescriptor::new(
            "GET_TOPIC_MESSAGES_QUERY_TOOL",
            "Get messages from a consensus service topic",
            json!({
                "type": "object",
                "properties": {
                    "topicId": {"type": "string", "description": "Topic to read, e.g. 0.0.7007"}
                },
                "required": ["topicId"]
            }),
        ),
    ]
}

/// Select tools by name from the catalogue.
///
/// An empty selection loads the full catalogue (the toolkit's "empty
/// array means all tools" convention). Unknown names are ignored.
pub fn select_tools(names: &[String]) -> Vec<ToolDescriptor> {
    let all = catalogue();
    if names.is_empty() {
        return all;
    }
    all.into_iter()
        .filter(|tool| names.iter().any(|n| n == &tool.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_twelve_tools() {
        assert_eq!(catalogue().len(), 12);
    }

    #[test]
    fn test_empty_selection_loads_all_tools() {
        let selected = select_tools(&[]);
        assert_eq!(selected.len(), catalogue().len());
    }

    #[test]
    fn test_selection_filters_by_name() {
        let names = vec![
            "TRANSFER_HBAR_TOOL".to_string(),
            "CREATE_TOPIC_TOOL".to_string(),
        ];
        let selected = select_tools(&names);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().any(|t| t.name == "TRANSFER_HBAR_TOOL"));
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let names = vec!["NO_SUCH_TOOL".to_string()];
        assert!(select_tools(&names).is_empty());
    }

    #[test]
    fn test_descriptors_carry_object_schemas() {
        for tool in catalogue() {
            assert_eq!(
                tool.parameters["type"], "object",
                "{} schema must be an object",
                tool.name
            );
            assert!(tool.parameters["properties"].is_object());
        }
    }
}
