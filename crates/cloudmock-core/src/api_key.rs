//! API key entity and synthesis.
//!
//! Two paths produce a key: reads echo the requested identifier with fixed
//! remaining fields, creation generates a fresh identifier plus the secret
//! value. The secret is returned exactly once, at creation — read responses
//! never carry it, so [`ApiKey`] itself does not either.

use serde::Serialize;

use crate::ident;

/// Name assigned when a creation request does not provide one.
pub const DEFAULT_KEY_NAME: &str = "Unnamed Key";

/// Owner recorded on every synthesized key.
const KEY_OWNER: &str = "user_1000";

/// Creation date reported for keys synthesized on the read path.
const SAMPLE_CREATION_DATE: &str = "2024-02-01T10:15:00Z";

/// An API key, without its secret value.
#[derive(Debug, Clone, Serialize)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub creation_date: String,
    pub expiration_date: Option<String>,
}

/// Fields a client may supply when creating a key. All optional; wrong-typed
/// fields have already been dropped by the payload decoder.
#[derive(Debug, Default)]
pub struct NewApiKey {
    pub name: Option<String>,
    pub description: Option<String>,
    pub expiration_date: Option<String>,
}

/// A freshly created key together with its one-time secret.
#[derive(Debug)]
pub struct CreatedApiKey {
    pub key: ApiKey,
    pub secret: String,
}

impl ApiKey {
    /// Synthesize the key a read resolves to: the requested identifier is
    /// echoed back, everything else is fixed. There is no existence check.
    #[must_use]
    pub fn sample(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "integration-key".to_owned(),
            description: None,
            user_id: KEY_OWNER.to_owned(),
            creation_date: SAMPLE_CREATION_DATE.to_owned(),
            expiration_date: None,
        }
    }

    /// Create a key: fresh identifier and secret, creation stamped now.
    #[must_use]
    pub fn create(params: NewApiKey) -> CreatedApiKey {
        let key = Self {
            id: ident::api_key_id(),
            name: params.name.unwrap_or_else(|| DEFAULT_KEY_NAME.to_owned()),
            description: params.description,
            user_id: KEY_OWNER.to_owned(),
            creation_date: ident::timestamp(),
            expiration_date: params.expiration_date,
        };
        CreatedApiKey {
            key,
            secret: ident::secret_key(),
        }
    }
}
