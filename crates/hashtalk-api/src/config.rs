//! Environment configuration for the API server.

use anyhow::{Context, bail};
use secrecy::SecretString;

/// Default HTTP listen port (matches the legacy backend).
const DEFAULT_PORT: u16 = 3001;

/// Default model served through Groq.
const DEFAULT_MODEL: &str = "moonshotai/kimi-k2-instruct";

/// Default agent-kit service base URL.
const DEFAULT_AGENT_KIT_URL: &str = "http://localhost:3002";

/// Runtime configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// HTTP listen port (`PORT`, default 3001).
    pub port: u16,
    /// Groq API key (`GROQ_API_KEY`, required).
    pub groq_api_key: SecretString,
    /// Model identifier (`HASHTALK_MODEL`).
    pub model: String,
    /// Agent-kit service base URL (`AGENT_KIT_URL`).
    pub agent_kit_url: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let Ok(api_key) = std::env::var("GROQ_API_KEY") else {
            bail!("GROQ_API_KEY is not set");
        };

        let model =
            std::env::var("HASHTALK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let agent_kit_url =
            std::env::var("AGENT_KIT_URL").unwrap_or_else(|_| DEFAULT_AGENT_KIT_URL.to_string());

        Ok(Self {
            port,
            groq_api_key: SecretString::from(api_key),
            model,
            agent_kit_url,
        })
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.parse::<u16>()
        .with_context(|| format!("invalid PORT value: '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_accepts_valid_values() {
        assert_eq!(parse_port("3001").unwrap(), 3001);
        assert_eq!(parse_port("80").unwrap(), 80);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("70000").is_err());
    }
}
