/*
 * Responsibility
 * - Exchange an (optional) bearer credential for a VerifiedIdentity
 * - Exactly one provider call per request; no caching, no retries
 * - Every failure collapses to AuthError (401 at the boundary)
 */
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::credential::BearerCredential;
use super::owner::OwnerIdPolicy;
use super::provider::{ProviderError, SessionProvider};
use super::types::VerifiedIdentity;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no bearer credential supplied")]
    MissingCredential,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("validated session carries no subject")]
    MissingSubject,

    #[error("owner id could not be derived from the session")]
    MissingOwner,
}

pub struct IdentityValidator {
    provider: Arc<dyn SessionProvider>,
    owner_policy: OwnerIdPolicy,
}

impl fmt::Debug for IdentityValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityValidator")
            .field("provider", &self.provider.name())
            .field("owner_policy", &self.owner_policy)
            .finish()
    }
}

impl IdentityValidator {
    pub fn new(provider: Arc<dyn SessionProvider>, owner_policy: OwnerIdPolicy) -> Self {
        Self {
            provider,
            owner_policy,
        }
    }

    pub async fn validate(
        &self,
        credential: Option<&BearerCredential>,
    ) -> Result<VerifiedIdentity, AuthError> {
        let credential = credential.ok_or(AuthError::MissingCredential)?;

        let session = self.provider.validate_session(credential).await?;

        if session.subject.trim().is_empty() {
            return Err(AuthError::MissingSubject);
        }

        let owner_id = self
            .owner_policy
            .derive(&session)
            .ok_or(AuthError::MissingOwner)?;

        Ok(VerifiedIdentity::new(session.subject, owner_id))
    }
}
