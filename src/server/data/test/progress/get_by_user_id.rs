use super::*;

/// Tests that progress rows come back ordered by phase.
///
/// Rows are inserted out of order to make sure the ordering comes from the query.
///
/// Expected: Ok with phases [1, 2, 4]
#[tokio::test]
async fn returns_rows_ordered_by_phase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for phase in [4, 1, 2] {
        UserProgressFactory::new(db, &user.id)
            .phase(phase)
            .build()
            .await?;
    }

    let repo = UserProgressRepository::new(db);
    let rows = repo.get_by_user_id(&user.id).await?;

    let phases: Vec<i32> = rows.iter().map(|row| row.phase).collect();
    assert_eq!(phases, vec![1, 2, 4]);

    Ok(())
}

/// Tests that rows of other users are not returned.
///
/// Expected: Ok with only the queried user's row
#[tokio::test]
async fn returns_only_rows_for_specified_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;
    factory::create_user_progress(db, &user1.id).await?;
    factory::create_user_progress(db, &user2.id).await?;

    let repo = UserProgressRepository::new(db);
    let rows = repo.get_by_user_id(&user1.id).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, user1.id);

    Ok(())
}

/// Tests that an unknown user yields an empty list rather than an error.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserProgressRepository::new(db);
    let rows = repo.get_by_user_id("missing").await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests that stored task lists are decoded.
///
/// Expected: Ok with the task identifiers in insertion order
#[tokio::test]
async fn decodes_completed_tasks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    UserProgressFactory::new(db, &user.id)
        .completed_tasks(["market-research", "goal-setting"])
        .build()
        .await?;

    let repo = UserProgressRepository::new(db);
    let rows = repo.get_by_user_id(&user.id).await?;

    assert_eq!(
        rows[0].completed_tasks,
        vec!["market-research".to_string(), "goal-setting".to_string()]
    );

    Ok(())
}
