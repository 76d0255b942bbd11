//! Request middleware.
//!
//! - [`auth`] - `x-jwt-token` verification for single-account routes
//! - [`rate_limit`] - per-IP token bucket
//! - [`tracing`] - request spans and response logging

pub mod auth;
pub mod rate_limit;
pub mod tracing;
