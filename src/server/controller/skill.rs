use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        skill::{SkillProgressDto, UpsertSkillProgressDto},
    },
    server::{
        controller::{invalid, rejected},
        error::AppError,
        model::skill::UpsertSkillProgressParam,
        service::skill::SkillService,
        state::AppState,
    },
};

/// Tag for grouping skill endpoints in OpenAPI documentation
pub static SKILL_TAG: &str = "skill";

const RESOURCE: &str = "skill";

/// Get the skills of a user.
///
/// # Returns
/// - `200 OK` - Skills ordered by category, then name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/skills/{user_id}",
    tag = SKILL_TAG,
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Skills ordered by category, then name", body = Vec<SkillProgressDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_skills(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let skills = SkillService::new(&state.db).get_for_user(&user_id).await?;

    let skills_dto: Vec<SkillProgressDto> = skills.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(skills_dto)))
}

/// Record a skill level.
///
/// The skill is keyed by `(userId, skillName)`. `skillCategory` is stored when the skill
/// is first recorded and ignored afterwards.
///
/// # Returns
/// - `200 OK` - The created or updated skill
/// - `400 Bad Request` - Malformed body, blank names, or level outside 0 to 100
/// - `404 Not Found` - The user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = SKILL_TAG,
    request_body = UpsertSkillProgressDto,
    responses(
        (status = 200, description = "Created or updated skill", body = SkillProgressDto),
        (status = 400, description = "Invalid skill data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_skill_progress(
    State(state): State<AppState>,
    payload: Result<Json<UpsertSkillProgressDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload.map_err(|e| rejected(RESOURCE, e))?;

    let param = UpsertSkillProgressParam::from_dto(dto).map_err(|e| invalid(RESOURCE, e))?;
    let skill = SkillService::new(&state.db).upsert(param).await?;

    Ok((StatusCode::OK, Json(skill.into_dto())))
}
