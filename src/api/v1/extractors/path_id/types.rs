/*
 * Responsibility
 * - Per-resource id types; add a tag + alias when a resource is added
 */
use super::core::PathId;

// students
pub enum StudentTag {}
pub type StudentId = PathId<StudentTag>;
