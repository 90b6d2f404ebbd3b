//! Business logic for Hashtalk.
//!
//! Holds the process-local session registry, the agent service that
//! validates and dispatches chat requests, the reply post-processor,
//! and the trait seams (`ToolAgent`, `Toolkit`) that the infra crate
//! implements. hashtalk-core never depends on hashtalk-infra.

pub mod agent;
pub mod prompt;
pub mod reply;
pub mod session;
pub mod toolkit;
