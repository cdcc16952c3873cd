use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::rejected,
        error::AppError,
        model::user::RegisterUserParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a user.
///
/// Creates a user with the supplied id, or a generated UUID when no id is sent. Sending
/// an id that is already registered returns the stored user, so the browser can call
/// this on every visit with the id it keeps locally. The body may be omitted entirely.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Optional registration body with a previously issued `userId`
///
/// # Returns
/// - `200 OK` - The registered or existing user
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Registered or existing user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Option<Json<CreateUserDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = payload
        .map_err(|e| rejected("user", e))?
        .map(|Json(dto)| dto)
        .unwrap_or_default();

    let param = RegisterUserParam::from_dto(dto);
    let user = UserService::new(&state.db).register(param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
