use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthCtx;

/// Handler-side extractor for `AuthCtx`.
///
/// The access middleware inserts `AuthCtx` before any protected handler runs, so a
/// missing value means a route was wired without authentication. That is a bug, not
/// a client error: fail with 500 and log it.
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthCtx>() {
            Some(ctx) => Ok(AuthCtxExtractor(ctx.clone())),
            None => {
                tracing::error!(
                    path = %parts.uri.path(),
                    "identity context missing on a protected route"
                );
                Err(AppError::Internal)
            }
        }
    }
}
