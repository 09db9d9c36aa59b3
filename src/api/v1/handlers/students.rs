/*
 * Responsibility
 * - /students CRUD handlers
 * - The owner always comes from AuthCtx (set by the access middleware), never from
 *   the path or the body
 * - Errors are returned as AppError; the mapping to status codes lives in error.rs
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::students::{
            CreateStudentRequest, MessageResponse, PatchStudentRequest, ReplaceStudentRequest,
            StudentResponse,
        },
        extractors::{AuthCtxExtractor, json::JsonBody, path_id::StudentId},
    },
    error::AppError,
    state::AppState,
};

pub async fn create_student(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    JsonBody(req): JsonBody<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    tracing::debug!(subject_id = ctx.subject_id(), "create student");
    let row = state.students.create(ctx.owner_id(), req.into()).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn get_student(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    student_id: StudentId,
) -> Result<Json<StudentResponse>, AppError> {
    let row = state.students.get(ctx.owner_id(), student_id.id).await?;

    Ok(Json(row.into()))
}

pub async fn list_students(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let rows = state.students.list(ctx.owner_id()).await?;

    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

pub async fn replace_student(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    student_id: StudentId,
    JsonBody(req): JsonBody<ReplaceStudentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(subject_id = ctx.subject_id(), student_id = student_id.id, "replace student");
    state
        .students
        .update(ctx.owner_id(), student_id.id, req.into())
        .await?;

    Ok(Json(MessageResponse {
        message: "Student updated successfully",
    }))
}

pub async fn patch_student(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    student_id: StudentId,
    JsonBody(req): JsonBody<PatchStudentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(subject_id = ctx.subject_id(), student_id = student_id.id, "patch student");
    state
        .students
        .update(ctx.owner_id(), student_id.id, req.into())
        .await?;

    Ok(Json(MessageResponse {
        message: "Student updated successfully",
    }))
}

pub async fn delete_student(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    student_id: StudentId,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(subject_id = ctx.subject_id(), student_id = student_id.id, "delete student");
    state.students.delete(ctx.owner_id(), student_id.id).await?;

    Ok(Json(MessageResponse {
        message: "Student deleted successfully",
    }))
}
