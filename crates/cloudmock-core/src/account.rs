//! The platform account entity.

use serde::Serialize;

/// Cross-cluster trust settings attached to an account.
#[derive(Debug, Clone, Serialize)]
pub struct TrustSettings {
    pub direct_trust: bool,
    pub external_trust: bool,
    pub trust_all: bool,
}

/// The account owning the API session.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String,
    pub trust: TrustSettings,
}

impl Account {
    /// The fixed account every request resolves to.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            id: "acc_3f8a1c6b".to_owned(),
            trust: TrustSettings {
                direct_trust: true,
                external_trust: false,
                trust_all: false,
            },
        }
    }
}
