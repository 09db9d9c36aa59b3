/*
 * Responsibility
 * - Identity values produced by validation and consumed by the store
 * - Built once per request by IdentityValidator, immutable afterwards
 */
use std::fmt;

/// Authorization scoping key. Every store operation requires one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `subject_id` is who authenticated, `owner_id` is what they may touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    subject_id: String,
    owner_id: OwnerId,
}

impl VerifiedIdentity {
    pub fn new(subject_id: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            subject_id: subject_id.into(),
            owner_id,
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }
}
