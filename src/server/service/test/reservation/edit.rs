use super::*;

/// Tests editing a reservation to the range it already holds.
///
/// Expected: Ok, the reservation does not conflict with itself
#[tokio::test]
async fn same_range_does_not_conflict_with_itself() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let manager = factory::create_account(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .build()
        .await?;
    factory::create_manager(db, reservation.id, manager.id).await?;

    let params = EditReservationParams {
        start_time: Some(at(2, 10)),
        end_time: Some(at(2, 12)),
        vacancy: Some(3),
        ..Default::default()
    };
    let updated = ReservationService::new(db, &calendar)
        .edit(manager.id, now(), reservation.id, params)
        .await?;

    assert_eq!(updated.range, range(2, 10, 12));
    assert_eq!(updated.vacancy, 3);

    Ok(())
}

/// Tests moving a reservation onto another live reservation.
///
/// Expected: Err(CourtReserved)
#[tokio::test]
async fn rejects_overlap_with_other_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let manager = factory::create_account(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .build()
        .await?;
    factory::create_manager(db, reservation.id, manager.id).await?;
    ReservationFactory::new(db, &venue, &court)
        .time(at(2, 14), at(2, 16))
        .build()
        .await?;

    let params = EditReservationParams {
        start_time: Some(at(2, 13)),
        end_time: Some(at(2, 15)),
        ..Default::default()
    };
    let result = ReservationService::new(db, &calendar)
        .edit(manager.id, now(), reservation.id, params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::CourtReserved))
    ));

    Ok(())
}

/// Tests that only provided fields change and the remark can be cleared.
///
/// Expected: remark cleared, time and levels kept
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let manager = factory::create_account(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .technical_levels("ADVANCED")
        .remark("bring shuttles")
        .build()
        .await?;
    factory::create_manager(db, reservation.id, manager.id).await?;

    let params = EditReservationParams {
        remark: Some(None),
        ..Default::default()
    };
    let updated = ReservationService::new(db, &calendar)
        .edit(manager.id, now(), reservation.id, params)
        .await?;

    assert_eq!(updated.remark, None);
    assert_eq!(updated.range, range(2, 10, 12));
    assert_eq!(updated.technical_levels, vec![TechnicalLevel::Advanced]);

    Ok(())
}

/// Tests editing by a member who is not the manager.
///
/// Expected: Err(NoPermission)
#[tokio::test]
async fn requires_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;
    let player = factory::create_account(db).await?;
    factory::create_member(db, reservation.id, player.id).await?;

    let params = EditReservationParams {
        vacancy: Some(1),
        ..Default::default()
    };
    let result = ReservationService::new(db, &calendar)
        .edit(player.id, now(), reservation.id, params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NoPermission(_)))
    ));

    Ok(())
}

/// Tests moving a reservation into the past.
///
/// Expected: Err(IllegalInput)
#[tokio::test]
async fn rejects_start_in_the_past() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (manager, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;

    let params = EditReservationParams {
        start_time: Some(now() - chrono::Duration::hours(1)),
        ..Default::default()
    };
    let result = ReservationService::new(db, &calendar)
        .edit(manager.id, now(), reservation.id, params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::IllegalInput(_)))
    ));

    Ok(())
}

/// Tests the calendar event for a manager with a linked calendar.
///
/// Expected: one EventUpdated carrying the court location and new range
#[tokio::test]
async fn emits_calendar_update_for_linked_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, mut rx) = CalendarDispatcher::channel();

    let stadium = factory::stadium::StadiumFactory::new(db)
        .name("North Park")
        .build()
        .await?;
    let venue = factory::venue::VenueFactory::new(db, stadium.id)
        .name("Hall A")
        .build()
        .await?;
    let court = factory::court::CourtFactory::new(db, venue.id)
        .number(3)
        .build()
        .await?;
    let manager = factory::account::AccountFactory::new(db)
        .google_login(true)
        .build()
        .await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .build()
        .await?;
    factory::create_manager(db, reservation.id, manager.id).await?;

    let params = EditReservationParams {
        start_time: Some(at(2, 11)),
        end_time: Some(at(2, 13)),
        ..Default::default()
    };
    ReservationService::new(db, &calendar)
        .edit(manager.id, now(), reservation.id, params)
        .await?;

    match rx.try_recv() {
        Ok(CalendarEvent::EventUpdated {
            reservation_id,
            location,
            start_time,
            end_time,
        }) => {
            assert_eq!(reservation_id, reservation.id);
            assert_eq!(location, "North Park Hall A No.3 badminton court");
            assert_eq!(start_time, at(2, 11));
            assert_eq!(end_time, at(2, 13));
        }
        other => panic!("expected EventUpdated, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());

    Ok(())
}

/// Tests that a manager without a linked calendar triggers no event.
///
/// Expected: channel stays empty
#[tokio::test]
async fn no_calendar_event_without_linked_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, mut rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let manager = factory::create_account(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .build()
        .await?;
    factory::create_manager(db, reservation.id, manager.id).await?;

    let params = EditReservationParams {
        vacancy: Some(1),
        ..Default::default()
    };
    let updated = ReservationService::new(db, &calendar)
        .edit(manager.id, now(), reservation.id, params)
        .await?;

    assert_eq!(updated.vacancy, 1);
    assert!(rx.try_recv().is_err());

    Ok(())
}

/// Tests an edit whose new end falls before the stored start.
///
/// Expected: Err(IllegalInput), stored range unchanged
#[tokio::test]
async fn rejects_inverted_effective_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let manager = factory::create_account(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .time(at(2, 10), at(2, 12))
        .build()
        .await?;
    factory::create_manager(db, reservation.id, manager.id).await?;

    let service = ReservationService::new(db, &calendar);
    let params = EditReservationParams {
        end_time: Some(at(2, 9)),
        ..Default::default()
    };
    let result = service
        .edit(manager.id, now(), reservation.id, params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::IllegalInput(_)))
    ));
    assert_eq!(service.read(reservation.id).await?.reservation.range, range(2, 10, 12));

    Ok(())
}
