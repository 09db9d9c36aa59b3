/*
 * Responsibility
 * - v1 URL layout
 * - /health is public; everything under /students goes through the access middleware
 *   (authenticate → route → handle)
 */
use axum::{Router, routing::get};

use crate::error::AppError;
use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    students::{
        create_student, delete_student, get_student, list_students, patch_student,
        replace_student,
    },
};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student)
                .put(replace_student)
                .patch(patch_student)
                .delete(delete_student),
        );

    Router::new()
        .route("/health", get(health))
        .merge(middleware::auth::access::apply(protected, state))
        .method_not_allowed_fallback(method_not_allowed)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
