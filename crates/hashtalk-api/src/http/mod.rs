//! HTTP/REST layer for Hashtalk.
//!
//! Axum-based API at `/api/agent/` with the legacy envelope format and
//! permissive CORS.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
