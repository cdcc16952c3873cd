use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{income_stream, progress, skill, user},
    docs::ApiDoc,
    error::AppError,
    state::AppState,
};

/// Builds the API router.
///
/// Routes are registered through `OpenApiRouter` so the OpenAPI document is assembled
/// from the handlers' `#[utoipa::path]` annotations. The document is served at
/// `/api/docs/openapi.json` with Swagger UI on `/api/docs`. Any other path answers
/// `404 { "error": "Route not found" }`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::create_user))
        .routes(routes!(progress::get_user_progress))
        .routes(routes!(progress::update_user_progress))
        .routes(routes!(skill::get_user_skills))
        .routes(routes!(skill::update_skill_progress))
        .routes(routes!(income_stream::get_user_income_streams))
        .routes(routes!(income_stream::update_income_stream))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(route_not_found)
}

/// CORS policy for browser clients served from any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
