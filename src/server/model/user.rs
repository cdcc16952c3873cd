//! User domain models and parameters.
//!
//! Users carry no credentials: a user is an opaque id plus a username derived from it,
//! handed to the browser on first visit and sent back with every request.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UserDto};

/// Number of leading id characters used to build the username.
const USERNAME_ID_PREFIX_LEN: usize = 8;

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// UUID string identifying the user.
    pub id: String,
    /// `user_` followed by the first 8 characters of the id at registration time.
    pub username: String,
    /// Timestamp when the user was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.id,
            username: self.username,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            created_at: entity.created_at,
        }
    }
}

/// Derives the username for a user id.
///
/// # Arguments
/// - `id` - User id, typically a UUID string
///
/// # Returns
/// - `String` - `user_` followed by the first 8 characters of `id`
pub fn username_for(id: &str) -> String {
    let prefix: String = id.chars().take(USERNAME_ID_PREFIX_LEN).collect();
    format!("user_{}", prefix)
}

/// Parameters for registering a user.
///
/// When `user_id` is present the caller is re-confirming an id it stored earlier;
/// otherwise the service generates a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserParam {
    /// Previously issued id, trimmed.
    pub user_id: Option<String>,
}

impl RegisterUserParam {
    /// Builds registration parameters from a request body.
    ///
    /// A blank or whitespace-only `userId` counts as absent, so a new id is generated.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        let user_id = dto
            .user_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Self { user_id }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: String,
    pub username: String,
}
