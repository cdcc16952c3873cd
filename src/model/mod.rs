//! Wire-level DTOs shared by the HTTP server and the API client.
//!
//! Field names are serialized in camelCase to match the JSON contract the
//! browser client was written against.

pub mod api;
pub mod income;
pub mod progress;
pub mod skill;
pub mod user;
