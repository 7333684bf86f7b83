use super::*;

/// Tests rejecting a pending invitation, then rejecting again.
///
/// Expected: first reject keeps the row as rejected, second fails NoPermission
#[tokio::test]
async fn invitee_rejects_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;
    let invitee = factory::create_account(db).await?;
    factory::create_invitee(db, reservation.id, invitee.id).await?;

    let service = MembershipService::new(db, &calendar);
    service.reject(invitee.id, reservation.id).await?;

    let member = ReservationMemberRepository::new(db)
        .read(reservation.id, invitee.id)
        .await?
        .unwrap();
    assert_eq!(member.status, MemberStatus::Rejected);

    let again = service.reject(invitee.id, reservation.id).await;
    assert!(matches!(
        again,
        Err(AppError::ReservationErr(ReservationError::NoPermission(_)))
    ));

    Ok(())
}

/// Tests rejecting as the manager and as an already joined player.
///
/// Expected: Err(NoPermission) for both
#[tokio::test]
async fn only_pending_invitations_can_be_rejected() -> Result<(), AppError> {
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

    let service = MembershipService::new(db, &calendar);
    for caller in [manager.id, player.id] {
        let result = service.reject(caller, reservation.id).await;
        assert!(matches!(
            result,
            Err(AppError::ReservationErr(ReservationError::NoPermission(_)))
        ));
    }

    Ok(())
}

/// Tests rejecting an invitation that did not come through the code.
///
/// Expected: Err(NoPermission)
#[tokio::test]
async fn invitation_from_other_source() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, _, _, reservation) = factory::helpers::create_reservation_with_manager(db).await?;
    let invitee = factory::create_account(db).await?;
    factory::reservation_member::ReservationMemberFactory::new(db, reservation.id, invitee.id)
        .status("INVITED")
        .source("OTHER")
        .build()
        .await?;

    let result = MembershipService::new(db, &calendar)
        .reject(invitee.id, reservation.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NoPermission(_)))
    ));

    Ok(())
}

/// Tests rejecting without a membership row.
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
        .reject(outsider.id, reservation.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NotFound(_)))
    ));

    Ok(())
}
