//! Organization routes: `/api/v1/organizations`

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use cloudmock_core::organization::Organization;

/// Build the organizations router.
pub fn router() -> Router {
    Router::new().route("/", get(list_organizations))
}

/// Response for organization listing. `next_page` is always the null
/// sentinel — the mock never produces a real pagination cursor.
#[derive(Debug, Serialize)]
pub struct OrganizationListResponse {
    pub organizations: Vec<Organization>,
    pub next_page: Option<String>,
}

/// List the fixed organizations.
async fn list_organizations() -> Json<OrganizationListResponse> {
    Json(OrganizationListResponse {
        organizations: Organization::samples(),
        next_page: None,
    })
}
