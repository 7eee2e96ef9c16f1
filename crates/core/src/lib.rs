//! Domain rules for the co-op placement portal.
//!
//! Nothing in this crate touches the database or HTTP. The `db` and `api`
//! crates depend on it for shared types, role tags, user-facing notices,
//! and input validation.

pub mod application;
pub mod error;
pub mod grade;
pub mod notice;
pub mod position;
pub mod roles;
pub mod search;
pub mod types;
