use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        progress::{UpsertUserProgressDto, UserProgressDto},
    },
    server::{
        controller::{invalid, rejected},
        error::AppError,
        model::progress::UpsertUserProgressParam,
        service::progress::ProgressService,
        state::AppState,
    },
};

/// Tag for grouping roadmap progress endpoints in OpenAPI documentation
pub static PROGRESS_TAG: &str = "progress";

const RESOURCE: &str = "progress";

/// Get the roadmap progress of a user.
///
/// Returns one entry per phase the user has recorded progress for, ordered by phase.
/// Unknown users get an empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Id of the user
///
/// # Returns
/// - `200 OK` - Progress entries ordered by phase
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/progress/{user_id}",
    tag = PROGRESS_TAG,
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Progress entries ordered by phase", body = Vec<UserProgressDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let progress = ProgressService::new(&state.db)
        .get_for_user(&user_id)
        .await?;

    let progress_dto: Vec<UserProgressDto> = progress.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(progress_dto)))
}

/// Record progress for a roadmap phase.
///
/// Creates the entry for `(userId, phase)` or updates it in place. `progress` and
/// `completedTasks` are only written when present in the body.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Progress data
///
/// # Returns
/// - `200 OK` - The created or updated entry
/// - `400 Bad Request` - Malformed body, unknown phase, or progress outside 0 to 100
/// - `404 Not Found` - The user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/progress",
    tag = PROGRESS_TAG,
    request_body = UpsertUserProgressDto,
    responses(
        (status = 200, description = "Created or updated progress entry", body = UserProgressDto),
        (status = 400, description = "Invalid progress data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_progress(
    State(state): State<AppState>,
    payload: Result<Json<UpsertUserProgressDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload.map_err(|e| rejected(RESOURCE, e))?;

    let param = UpsertUserProgressParam::from_dto(dto).map_err(|e| invalid(RESOURCE, e))?;
    let progress = ProgressService::new(&state.db).upsert(param).await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}
