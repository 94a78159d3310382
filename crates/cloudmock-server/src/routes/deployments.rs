//! Deployment routes: `/api/v1/deployments*`
//!
//! Bodies are parsed from raw bytes so malformed JSON surfaces as the
//! structured `Invalid JSON payload` error instead of a framework reject.

use axum::body::Bytes;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use cloudmock_core::deployment::{Deployment, Resource, ResourceBreakdown};
use cloudmock_core::{ident, payload};

use crate::error::ApiError;

/// Build the deployments router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_deployments).post(create_deployment))
        .route("/_search", post(search_deployments))
}

// ── Request / Response types ─────────────────────────────────────────

/// Response for deployment listing.
#[derive(Debug, Serialize)]
pub struct DeploymentListResponse {
    pub deployments: Vec<Deployment>,
}

/// Response for deployment creation.
#[derive(Debug, Serialize)]
pub struct DeploymentCreateResponse {
    pub id: String,
    pub name: String,
    pub alias: Option<String>,
    pub created: bool,
    pub resources: Vec<Resource>,
}

/// Response for deployment search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub deployments: Vec<SearchDeployment>,
    #[serde(rename = "returnCount")]
    pub return_count: u32,
    #[serde(rename = "matchCount")]
    pub match_count: u32,
}

/// A deployment as reported by search: health flag plus an empty per-kind
/// resource breakdown.
#[derive(Debug, Serialize)]
pub struct SearchDeployment {
    pub id: String,
    pub name: String,
    pub healthy: bool,
    pub resources: ResourceBreakdown,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// List the fixed deployments. No filtering, no pagination.
async fn list_deployments() -> Json<DeploymentListResponse> {
    Json(DeploymentListResponse {
        deployments: Deployment::samples(),
    })
}

/// Create a deployment.
///
/// `name` must be present, non-null, and non-empty once stringified; the
/// deployment identifier is derived from it. A string `alias` is carried
/// through, anything else is treated as absent. Validation happens before
/// any synthetic data is built.
async fn create_deployment(body: Bytes) -> Result<Json<DeploymentCreateResponse>, ApiError> {
    let request: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_owned()))?;

    let name = payload::coerce_string(&request, "name")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Deployment name is required".to_owned()))?;

    let alias = payload::optional_string(&request, "alias");

    Ok(Json(DeploymentCreateResponse {
        id: ident::deployment_id(&name),
        name,
        alias,
        created: true,
        resources: vec![Resource::elasticsearch()],
    }))
}

/// Search deployments.
///
/// The query is required to be valid JSON but is never evaluated — the
/// mock has no data set to search. The result is the fixed deployment
/// pair, unhealthy and resource-free, with both counts pinned at 2.
async fn search_deployments(body: Bytes) -> Result<Json<SearchResponse>, ApiError> {
    serde_json::from_slice::<Value>(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_owned()))?;

    let deployments: Vec<SearchDeployment> = Deployment::samples()
        .into_iter()
        .map(|d| SearchDeployment {
            id: d.id,
            name: d.name,
            healthy: false,
            resources: ResourceBreakdown::default(),
        })
        .collect();

    let count = u32::try_from(deployments.len()).unwrap_or(u32::MAX);

    Ok(Json(SearchResponse {
        deployments,
        return_count: count,
        match_count: count,
    }))
}
