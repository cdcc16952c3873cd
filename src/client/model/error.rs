use thiserror::Error;

/// Failed API call.
///
/// `status` is the HTTP status of the response, or 500 when no usable response was
/// received. `message` is the server's `ErrorDto` message when one was sent.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}
