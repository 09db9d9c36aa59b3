/*
 * Responsibility
 * - Shared context bound to the Router (AppState), built once at startup
 *   - identity: IdentityValidator, students: ScopedStudentStore
 * - Cheap to clone (Arc inside); no per-request data lives here
 */
use std::sync::Arc;

use crate::services::{identity::IdentityValidator, students::ScopedStudentStore};

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityValidator>,
    pub students: ScopedStudentStore,
}

impl AppState {
    pub fn new(identity: Arc<IdentityValidator>, students: ScopedStudentStore) -> Self {
        Self { identity, students }
    }
}
