//! HTTP request handlers for the agent API.

pub mod agent;
