use super::*;

/// Tests that streams are ordered by stream type.
///
/// Expected: Ok with types in ascending order
#[tokio::test]
async fn returns_streams_ordered_by_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for stream_type in ["micro-saas", "consulting", "digital-products"] {
        IncomeStreamFactory::new(db, &user.id)
            .stream_type(stream_type)
            .build()
            .await?;
    }

    let repo = IncomeStreamRepository::new(db);
    let streams = repo.get_by_user_id(&user.id).await?;

    let types: Vec<&str> = streams.iter().map(|s| s.stream_type.as_str()).collect();
    assert_eq!(types, vec!["consulting", "digital-products", "micro-saas"]);

    Ok(())
}

/// Tests that streams of other users are excluded.
///
/// Expected: Ok with only the queried user's stream
#[tokio::test]
async fn returns_only_streams_for_specified_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user1, _, _, stream) = factory::create_user_with_records(db).await?;
    let (user2, _, _, _) = factory::create_user_with_records(db).await?;

    let repo = IncomeStreamRepository::new(db);
    let streams = repo.get_by_user_id(&user1.id).await?;

    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].id, stream.id);
    assert!(streams.iter().all(|s| s.user_id != user2.id));

    Ok(())
}
