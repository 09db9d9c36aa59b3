//! In-memory `StudentRepo` for tests. Mirrors the SQL predicates of `PgStudentRepo`.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::repos::error::{RepoError, RepoResult};
use crate::repos::student_repo::{NewStudent, StudentChanges, StudentRecord, StudentRepo};
use crate::services::identity::OwnerId;

#[derive(Debug, Default)]
pub struct MemoryStudentRepo {
    rows: Mutex<BTreeMap<i64, StudentRecord>>,
    next_id: AtomicUsize,
    pub calls: AtomicUsize,
    fail: AtomicBool,
    delay_ms: AtomicU64,
}

impl MemoryStudentRepo {
    /// Makes every following call fail like an unreachable database.
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Makes every following call stall before touching the rows.
    pub fn stall(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Raw row lookup that bypasses ownership, for asserting on stored state.
    pub fn stored(&self, id: i64) -> Option<StudentRecord> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    async fn enter(&self) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentRepo for MemoryStudentRepo {
    async fn insert(&self, owner_id: &OwnerId, student: &NewStudent) -> RepoResult<StudentRecord> {
        self.enter().await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let record = StudentRecord {
            id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            major: student.major.clone(),
            owner_id: owner_id.as_str().to_string(),
        };
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn find(&self, owner_id: &OwnerId, id: i64) -> RepoResult<Option<StudentRecord>> {
        self.enter().await?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(&id)
            .filter(|r| r.owner_id == owner_id.as_str())
            .cloned())
    }

    async fn list(&self, owner_id: &OwnerId) -> RepoResult<Vec<StudentRecord>> {
        self.enter().await?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|r| r.owner_id == owner_id.as_str())
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        owner_id: &OwnerId,
        id: i64,
        changes: &StudentChanges,
    ) -> RepoResult<u64> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows
            .get_mut(&id)
            .filter(|r| r.owner_id == owner_id.as_str())
        else {
            return Ok(0);
        };

        if let Some(v) = &changes.first_name {
            row.first_name = v.clone();
        }
        if let Some(v) = &changes.last_name {
            row.last_name = v.clone();
        }
        if let Some(v) = &changes.email {
            row.email = v.clone();
        }
        if let Some(v) = &changes.major {
            row.major = v.clone();
        }
        Ok(1)
    }

    async fn delete(&self, owner_id: &OwnerId, id: i64) -> RepoResult<u64> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get(&id) {
            Some(r) if r.owner_id == owner_id.as_str() => {
                rows.remove(&id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}
