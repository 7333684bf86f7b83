use super::*;

/// Tests the last member leaving.
///
/// Expected: the reservation is deleted
#[tokio::test]
async fn last_member_deletes_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (manager, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;

    MembershipService::new(db, &calendar)
        .leave(manager.id, reservation.id)
        .await?;

    assert!(ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .is_none());
    assert_eq!(
        ReservationMemberRepository::new(db)
            .count(reservation.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests a joined player leaving while others remain.
///
/// Expected: only that membership removed, the slot freed
#[tokio::test]
async fn player_leaves_and_frees_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (manager, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;
    let player = factory::create_account(db).await?;
    factory::create_member(db, reservation.id, player.id).await?;

    MembershipService::new(db, &calendar)
        .leave(player.id, reservation.id)
        .await?;

    let member_repo = ReservationMemberRepository::new(db);
    assert!(member_repo.read(reservation.id, player.id).await?.is_none());
    assert!(member_repo.read(reservation.id, manager.id).await?.is_some());

    let stored = ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.vacancy, reservation.vacancy + 1);

    Ok(())
}

/// Tests the manager leaving while a player remains.
///
/// Expected: reservation kept with the player, vacancy unchanged
#[tokio::test]
async fn manager_leaves_before_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (manager, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;
    let player = factory::create_account(db).await?;
    factory::create_member(db, reservation.id, player.id).await?;

    MembershipService::new(db, &calendar)
        .leave(manager.id, reservation.id)
        .await?;

    let stored = ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.vacancy, reservation.vacancy);
    assert_eq!(
        ReservationMemberRepository::new(db)
            .count(reservation.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests leaving a private reservation.
///
/// Expected: vacancy stays -1
#[tokio::test]
async fn private_reservation_keeps_vacancy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .vacancy(-1)
        .build()
        .await?;
    let manager = factory::create_account(db).await?;
    factory::create_manager(db, reservation.id, manager.id).await?;
    let player = factory::create_account(db).await?;
    factory::create_member(db, reservation.id, player.id).await?;

    MembershipService::new(db, &calendar)
        .leave(player.id, reservation.id)
        .await?;

    let stored = ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.vacancy, -1);

    Ok(())
}

/// Tests leaving a reservation the caller is not part of.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn non_member_gets_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;
    let outsider = factory::create_account(db).await?;

    let result = MembershipService::new(db, &calendar)
        .leave(outsider.id, reservation.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NotFound(_)))
    ));

    Ok(())
}
