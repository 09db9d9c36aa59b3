pub mod health;
pub mod students;
