/*
 * Responsibility
 * - Turn a validated session into the ownership scoping key (OwnerId)
 * - Injected into IdentityValidator; selected from config (OWNER_ID_CLAIM)
 */
use serde_json::Value;

use super::provider::ProviderSession;
use super::types::OwnerId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OwnerIdPolicy {
    /// ownerID is the authenticated subject.
    #[default]
    Subject,
    /// ownerID comes from the named claim (string, or integer rendered in decimal).
    Claim(String),
}

impl OwnerIdPolicy {
    pub fn from_claim_name(claim: Option<&str>) -> Self {
        match claim {
            Some(name) => Self::Claim(name.to_string()),
            None => Self::Subject,
        }
    }

    /// `None` when the policy cannot produce a non-blank owner id.
    pub fn derive(&self, session: &ProviderSession) -> Option<OwnerId> {
        let raw = match self {
            Self::Subject => Some(session.subject.clone()),
            Self::Claim(name) => match session.claims.get(name) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Some(n.to_string()),
                _ => None,
            },
        };

        raw.filter(|s| !s.trim().is_empty()).map(OwnerId::new)
    }
}
