//! Session authentication primitives.
//!
//! - [`session_token`] -- Opaque session token generation and hashing.
//! - [`cookie`] -- Reading and building the `Cookie` / `Set-Cookie` headers.

pub mod cookie;
pub mod session_token;
