use super::*;

/// Tests creating a stream with no flags supplied.
///
/// Expected: Ok with an inactive stream and zero revenue
#[tokio::test]
async fn creates_inactive_stream_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = IncomeStreamRepository::new(db);
    let stream = repo
        .upsert(param(&user.id, "consulting", None, None))
        .await?;

    assert_eq!(stream.stream_type, "consulting");
    assert!(!stream.is_active);
    assert_eq!(stream.monthly_revenue, 0);

    Ok(())
}

/// Tests that each field is only overwritten when supplied.
///
/// Expected: Ok with `is_active` toggled by the first update and revenue by the second
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    IncomeStreamFactory::new(db, &user.id)
        .stream_type("micro-saas")
        .monthly_revenue(250)
        .build()
        .await?;

    let repo = IncomeStreamRepository::new(db);

    let activated = repo
        .upsert(param(&user.id, "micro-saas", Some(true), None))
        .await?;
    assert!(activated.is_active);
    assert_eq!(activated.monthly_revenue, 250);

    let repriced = repo
        .upsert(param(&user.id, "micro-saas", None, Some(1200)))
        .await?;
    assert!(repriced.is_active);
    assert_eq!(repriced.monthly_revenue, 1200);
    assert_eq!(repriced.id, activated.id);

    let count = entity::prelude::IncomeStream::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests finding a stream by type after an upsert.
///
/// Expected: Ok(Some) for the written type, Ok(None) for another type
#[tokio::test]
async fn upserted_stream_is_found_by_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = IncomeStreamRepository::new(db);

    repo.upsert(param(&user.id, "digital-products", Some(true), Some(90)))
        .await?;

    let found = repo.find_by_stream_type(&user.id, "digital-products").await?;
    let missing = repo.find_by_stream_type(&user.id, "consulting").await?;

    assert_eq!(found.map(|s| s.monthly_revenue), Some(90));
    assert!(missing.is_none());

    Ok(())
}

/// Tests two concurrent first writes to the same stream type.
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
    let repo = IncomeStreamRepository::new(db);

    let (first, second) = tokio::join!(
        repo.upsert(param(&user.id, "consulting", Some(true), None)),
        repo.upsert(param(&user.id, "consulting", None, Some(500)))
    );

    assert_eq!(first?.id, second?.id);

    let stored = repo.find_by_stream_type(&user.id, "consulting").await?.unwrap();
    assert!(stored.is_active);
    assert_eq!(stored.monthly_revenue, 500);

    let count = entity::prelude::IncomeStream::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
