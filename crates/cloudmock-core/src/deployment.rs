//! Deployment and resource entities.
//!
//! A deployment groups resources (clusters) in a region. The mock exposes
//! a fixed pair of deployments for list operations and attaches a single
//! fixed elasticsearch resource to every created deployment.

use serde::Serialize;

/// Region reported for synthesized resources.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Lifecycle state of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Running,
    Stopped,
}

/// A single resource (cluster) inside a deployment.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: String,
    pub kind: String,
    pub region: String,
    #[serde(rename = "refId")]
    pub ref_id: String,
}

impl Resource {
    /// The fixed elasticsearch resource attached on deployment creation.
    #[must_use]
    pub fn elasticsearch() -> Self {
        Self {
            id: "es_4f7c2d9a".to_owned(),
            kind: "elasticsearch".to_owned(),
            region: DEFAULT_REGION.to_owned(),
            ref_id: "main-elasticsearch".to_owned(),
        }
    }
}

/// A deployment and its resources.
#[derive(Debug, Clone, Serialize)]
pub struct Deployment {
    pub id: String,
    pub name: String,
    pub region: String,
    pub status: DeploymentStatus,
    pub resources: Vec<Resource>,
}

impl Deployment {
    /// The fixed deployments returned by every list operation.
    #[must_use]
    pub fn samples() -> Vec<Self> {
        vec![
            Self {
                id: "dep_logging_cluster_123".to_owned(),
                name: "logging-cluster".to_owned(),
                region: DEFAULT_REGION.to_owned(),
                status: DeploymentStatus::Running,
                resources: Vec::new(),
            },
            Self {
                id: "dep_metrics_cluster_123".to_owned(),
                name: "metrics-cluster".to_owned(),
                region: "eu-west-1".to_owned(),
                status: DeploymentStatus::Stopped,
                resources: Vec::new(),
            },
        ]
    }
}

/// Per-kind resource listing carried by search results. Always empty in
/// the mock — search never resolves real resources.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceBreakdown {
    pub elasticsearch: Vec<Resource>,
    pub kibana: Vec<Resource>,
    pub apm: Vec<Resource>,
}
