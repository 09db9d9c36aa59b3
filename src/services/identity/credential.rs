/*
 * Responsibility
 * - Pull the bearer credential out of the Authorization header
 * - No external calls, never fails: anything unusable is simply "absent"
 */
use std::fmt;

use axum::http::{HeaderMap, header};

pub const BEARER_PREFIX: &str = "Bearer ";

/// Opaque session token supplied by the caller.
///
/// Forwarded verbatim to the identity provider. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerCredential(String);

impl BearerCredential {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerCredential").field(&"<redacted>").finish()
    }
}

/// Reads `Authorization`, strips a leading `Bearer ` if present.
///
/// A raw token without the prefix is passed through unchanged.
pub fn extract(headers: &HeaderMap) -> Option<BearerCredential> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);

    if token.trim().is_empty() {
        return None;
    }

    Some(BearerCredential(token.to_string()))
}

#[cfg(test)]
impl From<&str> for BearerCredential {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
