//! The organization entity.

use serde::Serialize;

/// An organization (tenant) on the platform.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Organization {
    /// The fixed organizations returned by every list operation.
    ///
    /// Timestamps are constants so repeated reads serialize identically.
    #[must_use]
    pub fn samples() -> Vec<Self> {
        vec![
            Self {
                id: "org_2d41f8ac".to_owned(),
                name: "Acme Observability".to_owned(),
                org_type: "standard".to_owned(),
                created_at: "2024-01-10T08:00:00Z".to_owned(),
                updated_at: "2024-03-02T16:45:00Z".to_owned(),
            },
            Self {
                id: "org_9b7e3c50".to_owned(),
                name: "Initech Platform".to_owned(),
                org_type: "enterprise".to_owned(),
                created_at: "2023-11-28T12:30:00Z".to_owned(),
                updated_at: "2024-02-14T09:10:00Z".to_owned(),
            },
        ]
    }
}
