/**
 * Responsibility
 * - What the persistence layer reports upward
 * - Details stay server-side; callers map this to a generic store failure
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
