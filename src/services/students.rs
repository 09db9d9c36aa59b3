/*
 * Responsibility
 * - The only entry point to persisted student records
 * - Every operation takes the caller's OwnerId explicitly; the owner is stamped on
 *   writes and used as a predicate on reads/updates/deletes
 * - "Absent" and "owned by someone else" are both NotFound
 * - Input validation (field rules, body id vs path id)
 */
use std::sync::Arc;

use thiserror::Error;

use crate::repos::error::RepoError;
use crate::repos::student_repo::{NewStudent, StudentChanges, StudentRecord, StudentRepo};
use crate::services::identity::OwnerId;

const MAX_FIELD_CHARS: usize = 255;

#[derive(Debug, Error)]
pub enum StudentError {
    #[error("invalid '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("student not found")]
    NotFound,

    #[error("student store failure: {0}")]
    Store(#[from] RepoError),
}

impl StudentError {
    fn validation(field: &'static str, message: &'static str) -> Self {
        Self::Validation { field, message }
    }
}

/// Update request as seen by the store: the optional id echoed in the body plus the
/// changes to apply.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub id: Option<i64>,
    pub changes: StudentChanges,
}

#[derive(Clone)]
pub struct ScopedStudentStore {
    repo: Arc<dyn StudentRepo>,
}

impl ScopedStudentStore {
    pub fn new(repo: Arc<dyn StudentRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        owner_id: &OwnerId,
        student: NewStudent,
    ) -> Result<StudentRecord, StudentError> {
        validate_new(&student)?;

        let record = self.repo.insert(owner_id, &student).await?;
        tracing::debug!(student_id = record.id, owner_id = %owner_id, "student created");

        Ok(record)
    }

    pub async fn get(&self, owner_id: &OwnerId, id: i64) -> Result<StudentRecord, StudentError> {
        self.repo
            .find(owner_id, id)
            .await?
            .ok_or(StudentError::NotFound)
    }

    pub async fn list(&self, owner_id: &OwnerId) -> Result<Vec<StudentRecord>, StudentError> {
        Ok(self.repo.list(owner_id).await?)
    }

    pub async fn update(
        &self,
        owner_id: &OwnerId,
        id: i64,
        update: StudentUpdate,
    ) -> Result<(), StudentError> {
        if let Some(body_id) = update.id
            && body_id != id
        {
            return Err(StudentError::validation("id", "mismatched identifiers"));
        }
        validate_changes(&update.changes)?;

        match self.repo.update(owner_id, id, &update.changes).await? {
            0 => Err(StudentError::NotFound),
            _ => Ok(()),
        }
    }

    pub async fn delete(&self, owner_id: &OwnerId, id: i64) -> Result<(), StudentError> {
        match self.repo.delete(owner_id, id).await? {
            0 => Err(StudentError::NotFound),
            _ => Ok(()),
        }
    }
}

fn validate_new(student: &NewStudent) -> Result<(), StudentError> {
    check_text("first_name", &student.first_name)?;
    check_text("last_name", &student.last_name)?;
    check_email(&student.email)?;
    check_text("major", &student.major)
}

fn validate_changes(changes: &StudentChanges) -> Result<(), StudentError> {
    if let Some(v) = &changes.first_name {
        check_text("first_name", v)?;
    }
    if let Some(v) = &changes.last_name {
        check_text("last_name", v)?;
    }
    if let Some(v) = &changes.email {
        check_email(v)?;
    }
    if let Some(v) = &changes.major {
        check_text("major", v)?;
    }
    Ok(())
}

fn check_text(field: &'static str, value: &str) -> Result<(), StudentError> {
    if value.trim().is_empty() {
        return Err(StudentError::validation(field, "must not be empty"));
    }
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(StudentError::validation(field, "must be <= 255 chars"));
    }
    Ok(())
}

fn check_email(value: &str) -> Result<(), StudentError> {
    check_text("email", value)?;
    if !value.contains('@') {
        return Err(StudentError::validation("email", "must contain '@'"));
    }
    Ok(())
}
