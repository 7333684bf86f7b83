use super::*;

/// Tests reading published and unpublished courts.
///
/// Expected: published court found, unpublished gives NotFound
#[tokio::test]
async fn hides_unpublished_court() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_court_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let hidden = factory::court::CourtFactory::new(db, venue.id)
        .published(false)
        .build()
        .await?;

    let service = CourtService::new(db);
    assert_eq!(service.read(court.id).await?.id, court.id);
    assert!(matches!(
        service.read(hidden.id).await,
        Err(AppError::ReservationErr(ReservationError::NotFound(_)))
    ));

    let courts = service.browse_by_venue(venue.id).await?;
    assert_eq!(courts.len(), 1);

    Ok(())
}
