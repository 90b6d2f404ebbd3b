//! Agent reply post-processing.
//!
//! Pure pattern-matching functions over the agent's free-text output:
//! extract the HashScan link and token/transaction identifiers, and
//! strip internal tool-call markup before display.
//!
//! All extractions run on the original text; markup stripping only
//! affects the returned display text. First match wins, extracted
//! values are not validated, and absence is `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

static HASHSCAN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://hashscan\.io/testnet/\S+").expect("valid regex"));

static TOKEN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""tokenId":\s*"([^"]+)""#).expect("valid regex"));

static TRANSACTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""transactionId":\s*"([^"]+)""#).expect("valid regex"));

static THINKING_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<anythingllm:thinking>.*?</anythingllm:thinking>").expect("valid regex")
});

static FUNCTION_CALLS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<anythingllm:function_calls>.*?</anythingllm:function_calls>")
        .expect("valid regex")
});

static FUNCTION_RESULT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<anythingllm:function_calls_result>.*?</anythingllm:function_calls_result>")
        .expect("valid regex")
});

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("valid regex"));

/// Structured fields extracted from one agent reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    /// The reply with tool-call markup removed and whitespace collapsed.
    pub clean_text: String,
    /// First block-explorer link in the reply, if any.
    pub hashscan_link: Option<String>,
    /// First `"tokenId": "..."` value in the reply, if any.
    pub token_id: Option<String>,
    /// First `"transactionId": "..."` value in the reply, if any.
    pub transaction_id: Option<String>,
}

/// Parse one agent reply into display text and extracted fields.
pub fn parse_reply(response: &str) -> ParsedReply {
    ParsedReply {
        clean_text: strip_tool_markup(response),
        hashscan_link: HASHSCAN_LINK
            .find(response)
            .map(|m| m.as_str().to_string()),
        token_id: TOKEN_ID
            .captures(response)
            .map(|caps| caps[1].to_string()),
        transaction_id: TRANSACTION_ID
            .captures(response)
            .map(|caps| caps[1].to_string()),
    }
}

/// Remove tool-call markup blocks and collapse the leftover whitespace.
///
/// Each delimited block is removed with its content (non-greedy), runs
/// of blank lines collapse to a single blank line, and the result is
/// trimmed.
pub fn strip_tool_markup(response: &str) -> String {
    let text = THINKING_BLOCK.replace_all(response, "");
    let text = FUNCTION_CALLS_BLOCK.replace_all(&text, "");
    let text = FUNCTION_RESULT_BLOCK.replace_all(&text, "");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}
