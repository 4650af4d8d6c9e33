//! HTTP layer: thin adapters mapping routes onto the core services.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
