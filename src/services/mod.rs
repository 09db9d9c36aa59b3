pub mod identity;
pub mod students;
