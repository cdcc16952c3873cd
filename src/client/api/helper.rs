use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let status = status.as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match serde_json::from_str::<ErrorDto>(&body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if body.is_empty() => "Unknown error".to_string(),
            Err(_) => body,
        };

        Err(ApiError { status, message })
    }
}

/// Send a request and handle common errors
pub async fn send_request(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}
