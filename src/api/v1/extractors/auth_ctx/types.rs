/*
 * Responsibility
 * - The per-request identity context handlers see
 * - The access middleware builds it after validation and stores it in the request
 *   extensions; handlers only ever receive this type
 */
use crate::services::identity::{OwnerId, VerifiedIdentity};

/// Per-request, read-only. Never shared between requests.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    identity: VerifiedIdentity,
}

impl AuthCtx {
    pub fn new(identity: VerifiedIdentity) -> Self {
        Self { identity }
    }

    pub fn subject_id(&self) -> &str {
        self.identity.subject_id()
    }

    pub fn owner_id(&self) -> &OwnerId {
        self.identity.owner_id()
    }
}
