//! OpenAPI document for the REST API.
//!
//! Paths and schemas are collected by the router from the handlers' annotations; this
//! type only carries the document metadata and tag descriptions.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roadmap Tracker API",
        description = "Roadmap phase progress, skill levels and income streams per user"
    ),
    tags(
        (name = "user", description = "User registration"),
        (name = "progress", description = "Roadmap phase progress"),
        (name = "skill", description = "Skill levels"),
        (name = "income", description = "Income stream status")
    )
)]
pub struct ApiDoc;
