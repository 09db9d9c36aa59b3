/*
 * Responsibility
 * - students table access via SQLx
 * - owner_id is a mandatory predicate on every statement; the owner check and the
 *   mutation happen in one statement, so no application-level lock is needed
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;
use crate::services::identity::OwnerId;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
    pub owner_id: String,
}

/// Fields accepted on create. The owner comes from the authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

/// Partial update; `None` leaves the column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

#[async_trait]
pub trait StudentRepo: Send + Sync {
    async fn insert(&self, owner_id: &OwnerId, student: &NewStudent) -> RepoResult<StudentRecord>;

    async fn find(&self, owner_id: &OwnerId, id: i64) -> RepoResult<Option<StudentRecord>>;

    /// Ascending by id.
    async fn list(&self, owner_id: &OwnerId) -> RepoResult<Vec<StudentRecord>>;

    /// Returns the number of rows matched by both `id` and `owner_id`.
    async fn update(
        &self,
        owner_id: &OwnerId,
        id: i64,
        changes: &StudentChanges,
    ) -> RepoResult<u64>;

    /// Returns the number of rows matched by both `id` and `owner_id`.
    async fn delete(&self, owner_id: &OwnerId, id: i64) -> RepoResult<u64>;
}

#[derive(Clone, Debug)]
pub struct PgStudentRepo {
    pool: PgPool,
}

impl PgStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepo for PgStudentRepo {
    async fn insert(&self, owner_id: &OwnerId, student: &NewStudent) -> RepoResult<StudentRecord> {
        let row = sqlx::query_as::<_, StudentRecord>(
            r#"
            INSERT INTO students (first_name, last_name, email, major, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, major, owner_id
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.major)
        .bind(owner_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find(&self, owner_id: &OwnerId, id: i64) -> RepoResult<Option<StudentRecord>> {
        let row = sqlx::query_as::<_, StudentRecord>(
            r#"
            SELECT id, first_name, last_name, email, major, owner_id
            FROM students
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self, owner_id: &OwnerId) -> RepoResult<Vec<StudentRecord>> {
        // A row that fails to decode fails the whole query; no partial lists.
        let rows = sqlx::query_as::<_, StudentRecord>(
            r#"
            SELECT id, first_name, last_name, email, major, owner_id
            FROM students
            WHERE owner_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn update(
        &self,
        owner_id: &OwnerId,
        id: i64,
        changes: &StudentChanges,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                major = COALESCE($6, major)
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id.as_str())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.major.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, owner_id: &OwnerId, id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM students
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
