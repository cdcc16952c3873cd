use super::*;

/// Tests creating a skill without a level.
///
/// Expected: Ok with level 0
#[tokio::test]
async fn creates_skill_with_default_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SkillProgressRepository::new(db);
    let skill = repo
        .upsert(param(&user.id, "technical", "Rust", None))
        .await?;

    assert_eq!(skill.user_id, user.id);
    assert_eq!(skill.skill_category, "technical");
    assert_eq!(skill.skill_name, "Rust");
    assert_eq!(skill.level, 0);

    Ok(())
}

/// Tests updating the level of an existing skill.
///
/// Verifies that the category sent with an update is ignored; the category recorded
/// when the skill was first inserted is kept.
///
/// Expected: Ok with the new level, the original category and a single row
#[tokio::test]
async fn updates_level_and_keeps_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SkillProgressRepository::new(db);

    let original = repo
        .upsert(param(&user.id, "technical", "Rust", Some(30)))
        .await?;
    let updated = repo
        .upsert(param(&user.id, "business", "Rust", Some(80)))
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.level, 80);
    assert_eq!(updated.skill_category, "technical");

    let count = entity::prelude::SkillProgress::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an update without a level keeps the stored level.
///
/// Expected: Ok with the previous level and a refreshed timestamp
#[tokio::test]
async fn keeps_level_when_not_provided() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = SkillProgressFactory::new(db, &user.id)
        .skill_name("Networking")
        .level(55)
        .build()
        .await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let repo = SkillProgressRepository::new(db);
    let updated = repo
        .upsert(param(&user.id, "technical", "Networking", None))
        .await?;

    assert_eq!(updated.level, 55);
    assert!(updated.updated_at > existing.updated_at);

    let found = repo.find_by_skill_name(&user.id, "Networking").await?;
    assert_eq!(found.map(|s| s.level), Some(55));

    Ok(())
}

/// Tests that the same skill name for two users creates two rows.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn keeps_skills_separate_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;
    let repo = SkillProgressRepository::new(db);

    let a = repo
        .upsert(param(&user1.id, "technical", "Rust", Some(10)))
        .await?;
    let b = repo
        .upsert(param(&user2.id, "technical", "Rust", Some(90)))
        .await?;

    assert_ne!(a.id, b.id);
    assert_eq!(
        repo.find_by_skill_name(&user1.id, "Rust")
            .await?
            .map(|s| s.level),
        Some(10)
    );

    Ok(())
}

/// Tests two concurrent first writes to the same skill.
///
/// Expected: Ok for both calls and a single row
#[tokio::test]
async fn concurrent_first_writes_share_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SkillProgressRepository::new(db);

    let (first, second) = tokio::join!(
        repo.upsert(param(&user.id, "technical", "Rust", Some(10))),
        repo.upsert(param(&user.id, "technical", "Rust", Some(20)))
    );

    assert_eq!(first?.id, second?.id);

    let count = entity::prelude::SkillProgress::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
