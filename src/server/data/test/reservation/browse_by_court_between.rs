use super::*;

/// Tests fetching the reservations of a court within a window.
///
/// Expected: overlapping rows in start order, cancelled ones included, rows
/// outside the window and on other courts excluded
#[tokio::test]
async fn returns_window_in_start_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let other_court = factory::create_court(db, venue.id).await?;

    let late = ReservationFactory::new(db, &venue, &court)
        .time(at(1, 18), at(1, 20))
        .build()
        .await?;
    let early = ReservationFactory::new(db, &venue, &court)
        .time(at(1, 8), at(1, 9))
        .cancelled(true)
        .build()
        .await?;
    ReservationFactory::new(db, &venue, &court)
        .time(at(2, 8), at(2, 9))
        .build()
        .await?;
    ReservationFactory::new(db, &venue, &other_court)
        .time(at(1, 10), at(1, 11))
        .build()
        .await?;

    let reservations = ReservationRepository::new(db)
        .browse_by_court_between(court.id, &DateTimeRange::new(at(1, 0), at(2, 0)))
        .await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![early.id, late.id]);
    assert!(reservations[0].is_cancelled);

    Ok(())
}
