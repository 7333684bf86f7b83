use chrono::NaiveDate;

use super::*;

fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 5, day).unwrap()
}

/// Tests candidates where only the first one is taken by a full reservation.
///
/// Expected: the date of the second candidate
#[tokio::test]
async fn skips_range_covered_by_full_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    ReservationFactory::new(db, &venue, &court)
        .time(at(2, 9), at(2, 13))
        .vacancy(0)
        .build()
        .await?;

    let candidates = [range(2, 10, 12), range(3, 10, 12), range(4, 10, 12)];
    let found = AvailabilityService::new(db)
        .find_first_available(court.id, &candidates)
        .await?;

    assert_eq!(found, Some(may(3)));

    Ok(())
}

/// Tests reservations that do not make a candidate unavailable: one with
/// vacancy left, a cancelled full one, and a full one covering only part of it.
///
/// Expected: the first candidate's date
#[tokio::test]
async fn joinable_cancelled_or_partial_reservations_do_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .vacancy(1)
        .build()
        .await?;
    ReservationFactory::new(db, &venue, &court)
        .time(at(5, 10), at(5, 12))
        .vacancy(0)
        .cancelled(true)
        .build()
        .await?;
    ReservationFactory::new(db, &venue, &court)
        .time(at(6, 11), at(6, 12))
        .vacancy(0)
        .build()
        .await?;

    let service = AvailabilityService::new(db);
    for day in [2, 5, 6] {
        let found = service
            .find_first_available(court.id, &[range(day, 10, 12)])
            .await?;
        assert_eq!(found, Some(may(day)));
    }

    Ok(())
}

/// Tests candidates that are all taken.
///
/// Expected: None
#[tokio::test]
async fn none_when_every_range_is_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    for day in [2, 3] {
        ReservationFactory::new(db, &venue, &court)
            .time(at(day, 8), at(day, 20))
            .vacancy(0)
            .build()
            .await?;
    }

    let found = AvailabilityService::new(db)
        .find_first_available(court.id, &[range(2, 10, 12), range(3, 14, 16)])
        .await?;

    assert_eq!(found, None);

    Ok(())
}
