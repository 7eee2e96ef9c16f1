//! Co-op placement portal server library.
//!
//! Exposes the core building blocks (config, state, error handling, session
//! extractors, routes) so integration tests and the binary entrypoints can
//! both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
