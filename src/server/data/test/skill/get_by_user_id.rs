use super::*;

/// Tests that skills are ordered by category and then by name.
///
/// Expected: Ok with `business` skills before `technical` ones, names ascending
#[tokio::test]
async fn returns_skills_ordered_by_category_then_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for (category, name) in [
        ("technical", "Rust"),
        ("business", "Sales"),
        ("technical", "Python"),
        ("business", "Marketing"),
    ] {
        SkillProgressFactory::new(db, &user.id)
            .skill_category(category)
            .skill_name(name)
            .build()
            .await?;
    }

    let repo = SkillProgressRepository::new(db);
    let skills = repo.get_by_user_id(&user.id).await?;

    let names: Vec<&str> = skills.iter().map(|s| s.skill_name.as_str()).collect();
    assert_eq!(names, vec!["Marketing", "Sales", "Python", "Rust"]);

    Ok(())
}

/// Tests that an unknown user yields an empty list.
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

    let user = factory::create_user(db).await?;
    factory::create_skill_progress(db, &user.id).await?;

    let repo = SkillProgressRepository::new(db);
    let skills = repo.get_by_user_id("missing").await?;

    assert!(skills.is_empty());

    Ok(())
}
