//! Synthetic identifier and timestamp generation.
//!
//! Identifiers are opaque prefixed tokens. Uniqueness is probabilistic
//! (UUID v4 randomness), never checked against a store — there is none.
//! The one deliberate exception is [`deployment_id`], which is derived
//! from the deployment name so that clients can predict it in assertions.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Prefix of every secret key value returned on API key creation.
pub const SECRET_KEY_PREFIX: &str = "essu_";

/// 32 lowercase hex chars of fresh OS randomness.
fn hex_token() -> String {
    Uuid::new_v4().as_simple().to_string()
}

/// Generate an API key identifier: `key_` + 8 hex chars.
#[must_use]
pub fn api_key_id() -> String {
    let token = hex_token();
    format!("key_{}", &token[..8])
}

/// Generate a one-time secret key value: the fixed prefix + a 32-hex token.
#[must_use]
pub fn secret_key() -> String {
    format!("{SECRET_KEY_PREFIX}{}", hex_token())
}

/// Derive a deployment identifier from its name: `dep_<lowercased-name>_123`.
///
/// Deterministic from the input, unlike the random generators above.
#[must_use]
pub fn deployment_id(name: &str) -> String {
    format!("dep_{}_123", name.to_lowercase())
}

/// Current UTC time as an ISO-8601 string (second precision, `Z` suffix).
#[must_use]
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
