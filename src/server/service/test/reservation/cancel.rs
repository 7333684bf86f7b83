use super::*;

/// Tests cancelling as the manager.
///
/// Expected: reservation kept with is_cancelled set, members kept
#[tokio::test]
async fn manager_cancels_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (manager, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;

    let service = ReservationService::new(db, &calendar);
    service.cancel(manager.id, reservation.id).await?;

    let detail = service.read(reservation.id).await?;
    assert!(detail.reservation.is_cancelled);
    assert_eq!(detail.members.len(), 1);

    Ok(())
}

/// Tests cancelling by a non-member.
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

    let result = ReservationService::new(db, &calendar)
        .cancel(outsider.id, reservation.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NotFound(_)))
    ));

    Ok(())
}

/// Tests cancelling by a member who is not the manager.
///
/// Expected: Err(NoPermission), reservation stays live
#[tokio::test]
async fn member_cannot_cancel() -> Result<(), AppError> {
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

    let service = ReservationService::new(db, &calendar);
    let result = service.cancel(player.id, reservation.id).await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NoPermission(_)))
    ));
    assert!(!service.read(reservation.id).await?.reservation.is_cancelled);

    Ok(())
}
