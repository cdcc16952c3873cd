//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let skill = factory::create_skill_progress(&db, &user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::user_progress::UserProgressFactory;
//!
//! let progress = UserProgressFactory::new(&db, &user.id)
//!     .phase(2)
//!     .progress(45)
//!     .completed_tasks(["online-presence", "networking"])
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod income_stream;
pub mod skill_progress;
pub mod user;
pub mod user_progress;

pub use helpers::create_user_with_records;
pub use income_stream::create_income_stream;
pub use skill_progress::create_skill_progress;
pub use user::create_user;
pub use user_progress::create_user_progress;
