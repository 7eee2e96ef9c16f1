//! Account role tags.
//!
//! A login names the role it is claiming; the role decides which table the
//! email is looked up in and which dashboard the session lands on. The tag
//! strings are also stored in `sessions.role` and must match the CHECK
//! constraint in `20261016000012_create_sessions_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_EMPLOYER: &str = "employer";
pub const ROLE_FACULTY: &str = "faculty";

/// All role tags accepted at login, in display order.
pub const VALID_ROLES: &[&str] = &[ROLE_STUDENT, ROLE_EMPLOYER, ROLE_FACULTY];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Employer,
    Faculty,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => ROLE_STUDENT,
            Role::Employer => ROLE_EMPLOYER,
            Role::Faculty => ROLE_FACULTY,
        }
    }

    /// Path of the dashboard a freshly authenticated session is sent to.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Employer => "/employer/dashboard",
            Role::Faculty => "/faculty/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_STUDENT => Ok(Role::Student),
            ROLE_EMPLOYER => Ok(Role::Employer),
            ROLE_FACULTY => Ok(Role::Faculty),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{}'. Valid roles: {}",
                other,
                VALID_ROLES.join(", ")
            ))),
        }
    }
}
