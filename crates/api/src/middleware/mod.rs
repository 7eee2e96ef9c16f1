//! Session and role extractors.
//!
//! - [`session::Identity`] -- Resolves the session cookie to an account id and role.
//! - [`rbac::RequireStudent`] -- Requires a student session and loads the student row.
//! - [`rbac::RequireEmployer`] -- Requires an employer session and loads the employer row.
//! - [`rbac::RequireFaculty`] -- Requires a faculty session and loads the coordinator row.

pub mod rbac;
pub mod session;
