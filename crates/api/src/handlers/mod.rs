pub mod auth;
pub mod employer;
pub mod faculty;
pub mod student;
