//! `cloudmock` HTTP server.
//!
//! Wires the core library's synthetic entities into an Axum router that
//! answers the same requests a real cloud-platform management API would,
//! with deterministic canned responses. Handlers are pure and stateless:
//! nothing is persisted, authenticated, or shared between requests.

pub mod config;
pub mod error;
pub mod routes;
