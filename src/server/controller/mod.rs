//! HTTP request handlers.
//!
//! Each handler parses its JSON body itself so that malformed payloads and payloads
//! failing validation produce the same `400 { "error": "Invalid <resource> data: ..." }`
//! response. Parsed DTOs are converted to parameter models before the service is called,
//! and domain models are converted back to DTOs on the way out.

pub mod income_stream;
pub mod progress;
pub mod skill;
pub mod user;

use axum::extract::rejection::JsonRejection;

use crate::server::error::{validation::ValidationError, AppError};

/// Builds the 400 error for a request body that could not be used.
fn invalid_payload(resource: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(format!("Invalid {} data: {}", resource, reason))
}

/// Maps a JSON extraction failure for `resource` to a 400.
fn rejected(resource: &str, rejection: JsonRejection) -> AppError {
    invalid_payload(resource, rejection.body_text())
}

/// Maps a validation failure for `resource` to a 400.
fn invalid(resource: &str, err: ValidationError) -> AppError {
    invalid_payload(resource, err)
}
