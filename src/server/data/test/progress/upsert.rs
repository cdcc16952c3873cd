use super::*;

/// Tests creating a new progress row.
///
/// Verifies that the repository inserts a row with defaults for absent fields when none
/// exists for `(user_id, phase)`.
///
/// Expected: Ok with progress 0 and no tasks
#[tokio::test]
async fn creates_new_row_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserProgressRepository::new(db);
    let created = repo
        .upsert(param(&user.id, RoadmapPhase::Integration))
        .await?;

    assert_eq!(created.user_id, user.id);
    assert_eq!(created.phase, 2);
    assert_eq!(created.progress, 0);
    assert!(created.completed_tasks.is_empty());

    let stored = entity::prelude::UserProgress::find_by_id(created.id.clone())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests updating an existing progress row.
///
/// Verifies that upserting the same `(user_id, phase)` rewrites the row in place rather
/// than inserting a second one.
///
/// Expected: Ok with the same id, new values, and a single row
#[tokio::test]
async fn updates_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserProgressRepository::new(db);

    let original = repo
        .upsert(UpsertUserProgressParam {
            progress: Some(10),
            completed_tasks: Some(vec!["market-research".to_string()]),
            ..param(&user.id, RoadmapPhase::Foundation)
        })
        .await?;

    let updated = repo
        .upsert(UpsertUserProgressParam {
            progress: Some(75),
            completed_tasks: Some(vec![
                "market-research".to_string(),
                "skill-assessment".to_string(),
            ]),
            ..param(&user.id, RoadmapPhase::Foundation)
        })
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.progress, 75);
    assert_eq!(updated.completed_tasks.len(), 2);

    let count = entity::prelude::UserProgress::find()
        .filter(entity::user_progress::Column::UserId.eq(user.id.as_str()))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that absent fields keep their stored values on update.
///
/// Expected: Ok with the task list preserved when only progress is sent
#[tokio::test]
async fn keeps_tasks_when_not_provided() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    UserProgressFactory::new(db, &user.id)
        .phase(1)
        .progress(30)
        .completed_tasks(["goal-setting"])
        .build()
        .await?;

    let repo = UserProgressRepository::new(db);
    let updated = repo
        .upsert(UpsertUserProgressParam {
            progress: Some(40),
            ..param(&user.id, RoadmapPhase::Foundation)
        })
        .await?;

    assert_eq!(updated.progress, 40);
    assert_eq!(updated.completed_tasks, vec!["goal-setting".to_string()]);

    let untouched = repo
        .upsert(param(&user.id, RoadmapPhase::Foundation))
        .await?;
    assert_eq!(untouched.progress, 40);

    Ok(())
}

/// Tests that updating refreshes `updated_at`.
///
/// Expected: Ok with a later timestamp after the second upsert
#[tokio::test]
async fn refreshes_updated_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserProgressRepository::new(db);

    let first = repo
        .upsert(param(&user.id, RoadmapPhase::Expansion))
        .await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let second = repo
        .upsert(UpsertUserProgressParam {
            progress: Some(5),
            ..param(&user.id, RoadmapPhase::Expansion)
        })
        .await?;

    assert!(second.updated_at > first.updated_at);

    Ok(())
}

/// Tests that different phases and different users get separate rows.
///
/// Expected: Ok with three distinct rows
#[tokio::test]
async fn creates_separate_rows_per_natural_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;
    let repo = UserProgressRepository::new(db);

    let a = repo
        .upsert(param(&user1.id, RoadmapPhase::Foundation))
        .await?;
    let b = repo
        .upsert(param(&user1.id, RoadmapPhase::PivotScale))
        .await?;
    let c = repo
        .upsert(param(&user2.id, RoadmapPhase::Foundation))
        .await?;

    assert_ne!(a.id, b.id);
    assert_ne!(a.id, c.id);
    assert_ne!(b.id, c.id);

    let count = entity::prelude::UserProgress::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}

/// Tests two concurrent first writes to the same `(user_id, phase)`.
///
/// Both calls run before either row exists; the unique index must turn the second
/// insert into an update rather than a failure.
///
/// Expected: Ok for both calls, one row, same id
#[tokio::test]
async fn concurrent_first_writes_share_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserProgressRepository::new(db);

    let (first, second) = tokio::join!(
        repo.upsert(UpsertUserProgressParam {
            progress: Some(10),
            ..param(&user.id, RoadmapPhase::Foundation)
        }),
        repo.upsert(UpsertUserProgressParam {
            progress: Some(20),
            ..param(&user.id, RoadmapPhase::Foundation)
        })
    );

    let first = first?;
    let second = second?;
    assert_eq!(first.id, second.id);

    let stored = repo
        .find_by_phase(&user.id, RoadmapPhase::Foundation)
        .await?
        .unwrap();
    assert!([10, 20].contains(&stored.progress));

    let count = entity::prelude::UserProgress::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
