/*
 * Responsibility
 * - Request/response DTOs for /students
 * - Request DTOs carry no owner field: an `owner_id` (or legacy `teacher_id`) in a
 *   body is an unknown field and is dropped by serde
 */
use serde::{Deserialize, Serialize};

use crate::repos::student_repo::{NewStudent, StudentChanges, StudentRecord};
use crate::services::students::StudentUpdate;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            major: req.major,
        }
    }
}

/// PUT: every field is required.
#[derive(Debug, Deserialize)]
pub struct ReplaceStudentRequest {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

impl From<ReplaceStudentRequest> for StudentUpdate {
    fn from(req: ReplaceStudentRequest) -> Self {
        Self {
            id: req.id,
            changes: StudentChanges {
                first_name: Some(req.first_name),
                last_name: Some(req.last_name),
                email: Some(req.email),
                major: Some(req.major),
            },
        }
    }
}

/// PATCH: only the fields present are changed.
#[derive(Debug, Deserialize)]
pub struct PatchStudentRequest {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

impl From<PatchStudentRequest> for StudentUpdate {
    fn from(req: PatchStudentRequest) -> Self {
        Self {
            id: req.id,
            changes: StudentChanges {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                major: req.major,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
    pub owner_id: String,
}

impl From<StudentRecord> for StudentResponse {
    fn from(row: StudentRecord) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            major: row.major,
            owner_id: row.owner_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
