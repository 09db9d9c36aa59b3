//! CORS policy for browser clients.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: an origin is allowed when it is `http://` or `https://` followed by one
//!   of the configured prefixes (CORS_ALLOWED_ORIGIN_PREFIXES). Prefix, not exact,
//!   matching so preview deployments like `https://app-git-branch.host` pass.
//!   An empty list allows nothing.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

pub fn origin_allowed(origin: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| {
        ["https://", "http://"].iter().any(|scheme| {
            origin
                .strip_prefix(scheme)
                .is_some_and(|rest| rest.starts_with(prefix.as_str()))
        })
    })
}

/// Apply CORS policy to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    let allow_origin = if config.app_env.is_production() {
        let prefixes = config.cors_allowed_origin_prefixes.clone();

        AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
            origin
                .to_str()
                .is_ok_and(|origin| origin_allowed(origin, &prefixes))
        })
    } else {
        AllowOrigin::any()
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
