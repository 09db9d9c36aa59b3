//! Authenticate interceptor: bearer credential → IdentityValidator → `AuthCtx` in the
//! request extensions.
//!
//! Runs before routing reaches any protected handler, so an unauthenticated request
//! never touches the store.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::identity::credential;
use crate::state::AppState;

/// Puts the access middleware in front of every route of `router`.
///
/// `route_layer` keeps unmatched paths as 404 instead of 401.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn cannot take the State extractor; pass state explicitly
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credential = credential::extract(req.headers());

    let identity = match state.identity.validate(credential.as_ref()).await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "authentication failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(subject_id = identity.subject_id(), "request authenticated");

    // middleware → extractor
    req.extensions_mut().insert(AuthCtx::new(identity));

    Ok(next.run(req).await)
}
