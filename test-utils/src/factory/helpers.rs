//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating a user
//! together with rows in each of the per-user tables.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with one progress, one skill and one income stream row.
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, progress, skill, stream))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_records(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user_progress::Model,
        entity::skill_progress::Model,
        entity::income_stream::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let progress = crate::factory::user_progress::create_user_progress(db, &user.id).await?;
    let skill = crate::factory::skill_progress::create_skill_progress(db, &user.id).await?;
    let stream = crate::factory::income_stream::create_income_stream(db, &user.id).await?;

    Ok((user, progress, skill, stream))
}
