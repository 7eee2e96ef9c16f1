//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the table row
//! - A create DTO for inserts
//! - Joined read models where a view needs columns from a related table

pub mod application;
pub mod company;
pub mod department;
pub mod employer;
pub mod faculty;
pub mod grade;
pub mod offer;
pub mod position;
pub mod resume;
pub mod session;
pub mod student;
pub mod summary;
