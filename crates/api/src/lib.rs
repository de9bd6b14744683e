//! Knitnote API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests, the client crate's tests and the binary entrypoint
//! can all assemble the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
