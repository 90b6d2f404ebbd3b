//! Infrastructure implementations for Hashtalk.
//!
//! Concrete backends for the hashtalk-core seams: the Groq tool-calling
//! agent ([`llm::groq::GroqAgent`]) and the HTTP bridge to the external
//! agent-kit service ([`toolkit::AgentKitBridge`]).

pub mod llm;
pub mod toolkit;
