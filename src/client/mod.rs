//! Typed client for the roadmap REST API.
//!
//! Used by the command-line front end and by the HTTP tests. Only available with the
//! `client` feature flag enabled.

pub mod api;
pub mod model;

pub use api::ApiClient;
