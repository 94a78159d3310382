//! HTTP route handlers for the mock API.
//!
//! Routes are organized by resource:
//! - `account`: the platform account
//! - `deployments`: deployment list, creation, and search
//! - `keys`: API key read, creation, and invalidation
//! - `organizations`: organization list
//!
//! Every handler is a pure function of its request — no state crosses
//! requests, so the assembled router can serve them fully in parallel.

use axum::Router;

pub mod account;
pub mod deployments;
pub mod keys;
pub mod organizations;

/// Assemble the complete mock API router under `/api/v1`.
pub fn api_router() -> Router {
    Router::new()
        .nest("/api/v1/account", account::router())
        .nest("/api/v1/deployments", deployments::router())
        .nest("/api/v1/users/auth/keys", keys::router())
        .nest("/api/v1/organizations", organizations::router())
}
