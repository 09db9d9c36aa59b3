pub mod error;
#[cfg(test)]
pub mod memory_repo;
pub mod student_repo;
