//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Wire representations and the payload-to-entity mapping
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Resource route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
