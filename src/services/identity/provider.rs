//! Seam between the validator and whatever actually checks a session token.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use super::credential::BearerCredential;

/// What a provider hands back once it has accepted a token.
///
/// `subject` may be empty; the validator decides what that means.
#[derive(Debug, Clone, Default)]
pub struct ProviderSession {
    pub subject: String,
    pub claims: Map<String, Value>,
}

impl ProviderSession {
    /// Builds a session from a decoded claims object. The subject is `sub`, or `userId`
    /// when `sub` is absent or blank.
    pub fn from_claims(claims: Map<String, Value>) -> Self {
        let subject = ["sub", "userId"]
            .iter()
            .filter_map(|key| claims.get(*key).and_then(Value::as_str))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_default()
            .to_string();

        Self { subject, claims }
    }
}

/// Provider failures. All of them end up as a 401 at the boundary; the variants only
/// exist so the server log says what went wrong.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("session rejected: {0}")]
    Rejected(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("identity provider timed out")]
    Timeout,

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("identity provider misconfigured: {0}")]
    Config(String),
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Backend name, for logs.
    fn name(&self) -> &'static str;

    /// Exactly one validation attempt. Implementations must not cache or retry.
    async fn validate_session(
        &self,
        credential: &BearerCredential,
    ) -> Result<ProviderSession, ProviderError>;
}
