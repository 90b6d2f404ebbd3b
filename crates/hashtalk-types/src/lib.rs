//! Shared domain types for Hashtalk.
//!
//! This crate contains the types used across the Hashtalk backend and
//! client: chat request/reply envelopes, LLM message shapes, tool
//! descriptors, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod error;
pub mod llm;
pub mod tool;
