use super::*;

/// Tests retrieving a user by username.
///
/// Expected: Ok(Some(user)) with the matching id
#[tokio::test]
async fn returns_user_with_matching_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username(&first.username).await?;

    assert_eq!(user.map(|u| u.id), Some(first.id));

    Ok(())
}

/// Tests retrieving an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("user_nobody").await?;

    assert!(user.is_none());

    Ok(())
}
