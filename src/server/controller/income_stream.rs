use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        income::{IncomeStreamDto, UpsertIncomeStreamDto},
    },
    server::{
        controller::{invalid, rejected},
        error::AppError,
        model::income_stream::UpsertIncomeStreamParam,
        service::income_stream::IncomeStreamService,
        state::AppState,
    },
};

/// Tag for grouping income stream endpoints in OpenAPI documentation
pub static INCOME_TAG: &str = "income";

const RESOURCE: &str = "income stream";

/// Get the income streams of a user.
///
/// # Returns
/// - `200 OK` - Income streams ordered by stream type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/income/{user_id}",
    tag = INCOME_TAG,
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Income streams ordered by stream type", body = Vec<IncomeStreamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_income_streams(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let streams = IncomeStreamService::new(&state.db)
        .get_for_user(&user_id)
        .await?;

    let streams_dto: Vec<IncomeStreamDto> = streams.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(streams_dto)))
}

/// Record the status of an income stream.
///
/// `isActive` accepts a boolean or the integer flags `0` and `1`. Each of `isActive`
/// and `monthlyRevenue` is only written when present in the body.
///
/// # Returns
/// - `200 OK` - The created or updated income stream
/// - `400 Bad Request` - Malformed body, blank stream type, or negative revenue
/// - `404 Not Found` - The user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/income",
    tag = INCOME_TAG,
    request_body = UpsertIncomeStreamDto,
    responses(
        (status = 200, description = "Created or updated income stream", body = IncomeStreamDto),
        (status = 400, description = "Invalid income stream data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_income_stream(
    State(state): State<AppState>,
    payload: Result<Json<UpsertIncomeStreamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload.map_err(|e| rejected(RESOURCE, e))?;

    let param = UpsertIncomeStreamParam::from_dto(dto).map_err(|e| invalid(RESOURCE, e))?;
    let stream = IncomeStreamService::new(&state.db).upsert(param).await?;

    Ok((StatusCode::OK, Json(stream.into_dto())))
}
