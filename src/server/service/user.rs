//! User service for business logic.
//!
//! This module provides the `UserService` for registering users and resolving the owner
//! of per-user records. Registration is idempotent: re-sending a known id returns the
//! stored user instead of creating a new one.

use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{username_for, CreateUserParam, RegisterUserParam, User},
};

/// Service providing business logic for user registration and lookup.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user or returns the one already registered.
    ///
    /// The candidate id is the supplied `user_id`, or a fresh UUID v4 when none is given,
    /// and the username is derived from it. An existing user with the candidate id is
    /// returned as-is. Failing that, an existing user holding the derived username is
    /// returned, which covers a client re-sending a shortened or re-cased id. Only when
    /// neither exists is a new user inserted. If that insert loses a race against a
    /// concurrent registration and hits a unique constraint, the winner is looked up by id
    /// and then by username and returned instead.
    ///
    /// # Arguments
    /// - `param` - Optional previously issued user id
    ///
    /// # Returns
    /// - `Ok(User)` - The registered or existing user
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let id = param
            .user_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let username = username_for(&id);

        if let Some(user) = user_repo.find_by_id(&id).await? {
            tracing::debug!("User {} already registered", user.id);
            return Ok(user);
        }

        if let Some(user) = user_repo.find_by_username(&username).await? {
            tracing::debug!(
                "Username {} already taken by user {}, returning existing user",
                username,
                user.id
            );
            return Ok(user);
        }

        let created = user_repo
            .create(CreateUserParam {
                id: id.clone(),
                username: username.clone(),
            })
            .await;

        match created {
            Ok(user) => {
                tracing::info!("Registered user {} ({})", user.id, user.username);
                Ok(user)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!("Concurrent registration of {}, returning existing user", id);

                if let Some(user) = user_repo.find_by_id(&id).await? {
                    return Ok(user);
                }
                match user_repo.find_by_username(&username).await? {
                    Some(user) => Ok(user),
                    None => Err(err.into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(id).await?;
        Ok(user)
    }

    /// Retrieves a user by id, failing when it does not exist.
    ///
    /// Used by the other services before writing a record owned by the user.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn require_user(&self, id: &str) -> Result<User, AppError> {
        self.get_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
