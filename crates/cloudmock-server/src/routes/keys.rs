//! API key routes: `/api/v1/users/auth/keys*`
//!
//! Reads and deletes never consult a backing store — there is none — so
//! every identifier "exists". The secret key value appears in exactly one
//! place: the creation response.

use axum::body::Bytes;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use cloudmock_core::api_key::{ApiKey, CreatedApiKey, NewApiKey};
use cloudmock_core::payload;

use crate::error::ApiError;

/// Build the API keys router.
pub fn router() -> Router {
    Router::new()
        .route("/", post(create_key))
        .route("/{key_id}", get(get_key).delete(delete_key))
}

// ── Response types ───────────────────────────────────────────────────

/// An API key as returned by reads. Never carries the secret.
#[derive(Debug, Serialize)]
pub struct ApiKeyResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub creation_date: String,
    pub expiration_date: Option<String>,
}

impl From<ApiKey> for ApiKeyResponse {
    fn from(key: ApiKey) -> Self {
        Self {
            id: key.id,
            name: key.name,
            description: key.description,
            user_id: key.user_id,
            creation_date: key.creation_date,
            expiration_date: key.expiration_date,
        }
    }
}

/// The creation response: the key plus its one-time secret value.
#[derive(Debug, Serialize)]
pub struct ApiKeyCreateResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub creation_date: String,
    pub expiration_date: Option<String>,
    pub api_key: String,
}

impl From<CreatedApiKey> for ApiKeyCreateResponse {
    fn from(created: CreatedApiKey) -> Self {
        Self {
            id: created.key.id,
            name: created.key.name,
            description: created.key.description,
            user_id: created.key.user_id,
            creation_date: created.key.creation_date,
            expiration_date: created.key.expiration_date,
            api_key: created.secret,
        }
    }
}

/// Response for key invalidation. Unconditional — with no store to check,
/// every key is "found".
#[derive(Debug, Serialize)]
pub struct KeyDeleteResponse {
    pub found: bool,
    pub invalidated: bool,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Read a key. The identifier is echoed back without an existence check;
/// unlike delete, an empty identifier is accepted here.
async fn get_key(Path(key_id): Path<String>) -> Json<ApiKeyResponse> {
    Json(ApiKey::sample(key_id).into())
}

/// Create a key. Every body field is optional and leniently decoded; a
/// missing or wrong-typed `name` falls back to the default instead of
/// rejecting.
async fn create_key(body: Bytes) -> Result<Json<ApiKeyCreateResponse>, ApiError> {
    let request: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_owned()))?;

    let created = ApiKey::create(NewApiKey {
        name: payload::optional_string(&request, "name"),
        description: payload::optional_string(&request, "description"),
        expiration_date: payload::optional_string(&request, "expiration_date"),
    });

    Ok(Json(created.into()))
}

/// Invalidate a key. The identifier must be non-empty; beyond that the
/// operation always reports success.
async fn delete_key(Path(key_id): Path<String>) -> Result<Json<KeyDeleteResponse>, ApiError> {
    if key_id.is_empty() {
        return Err(ApiError::BadRequest("API Key ID is required".to_owned()));
    }

    Ok(Json(KeyDeleteResponse {
        found: true,
        invalidated: true,
    }))
}
