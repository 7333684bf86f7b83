use super::*;

/// Tests joining by invitation code as a newcomer.
///
/// Expected: caller joined via invitation code, vacancy decremented, one
/// MemberAdded event
#[tokio::test]
async fn newcomer_joins_and_takes_a_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, mut rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .invitation_code("PLAYNOW2")
        .vacancy(2)
        .build()
        .await?;
    let caller = factory::create_account(db).await?;

    MembershipService::new(db, &calendar)
        .join(caller.id, "PLAYNOW2")
        .await?;

    let member = ReservationMemberRepository::new(db)
        .read(reservation.id, caller.id)
        .await?
        .unwrap();
    assert_eq!(member.status, MemberStatus::Joined);
    assert!(!member.is_manager);

    let stored = ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.vacancy, 1);

    assert_eq!(
        rx.try_recv().ok(),
        Some(CalendarEvent::MemberAdded {
            reservation_id: reservation.id,
            account_id: caller.id,
        })
    );

    Ok(())
}

/// Tests joining a reservation without vacancy.
///
/// Expected: Err(ReservationFull) for a full and for a private reservation
#[tokio::test]
async fn full_or_private_reservation_rejects_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    ReservationFactory::new(db, &venue, &court)
        .invitation_code("FULLFULL")
        .vacancy(0)
        .build()
        .await?;
    ReservationFactory::new(db, &venue, &court)
        .invitation_code("PRIVATE2")
        .vacancy(-1)
        .build()
        .await?;
    let caller = factory::create_account(db).await?;

    let service = MembershipService::new(db, &calendar);
    for code in ["FULLFULL", "PRIVATE2"] {
        let result = service.join(caller.id, code).await;
        assert!(matches!(
            result,
            Err(AppError::ReservationErr(ReservationError::ReservationFull))
        ));
    }

    Ok(())
}

/// Tests joining with an unknown code.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let caller = factory::create_account(db).await?;

    let result = MembershipService::new(db, &calendar)
        .join(caller.id, "NOSUCHCD")
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NotFound(_)))
    ));

    Ok(())
}

/// Tests joining twice.
///
/// Expected: second join succeeds without taking another slot or emitting an event
#[tokio::test]
async fn join_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, mut rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .invitation_code("TWICE234")
        .vacancy(3)
        .build()
        .await?;
    let caller = factory::create_account(db).await?;

    let service = MembershipService::new(db, &calendar);
    service.join(caller.id, "TWICE234").await?;
    service.join(caller.id, "TWICE234").await?;

    let stored = ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.vacancy, 2);
    assert_eq!(
        ReservationMemberRepository::new(db)
            .count(reservation.id)
            .await?,
        1
    );

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());

    Ok(())
}

/// Tests accepting a pending invitation through the code.
///
/// Expected: invitee promoted to joined, vacancy decremented
#[tokio::test]
async fn invitee_is_promoted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .invitation_code("INVITED2")
        .vacancy(2)
        .build()
        .await?;
    let invitee = factory::create_account(db).await?;
    factory::create_invitee(db, reservation.id, invitee.id).await?;

    MembershipService::new(db, &calendar)
        .join(invitee.id, "INVITED2")
        .await?;

    let member = ReservationMemberRepository::new(db)
        .read(reservation.id, invitee.id)
        .await?
        .unwrap();
    assert_eq!(member.status, MemberStatus::Joined);
    let stored = ReservationRepository::new(db)
        .read(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.vacancy, 1);

    Ok(())
}

/// Tests joining after rejecting the invitation.
///
/// Expected: Err(NoPermission), status stays rejected
#[tokio::test]
async fn rejected_member_cannot_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (calendar, _rx) = CalendarDispatcher::channel();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let reservation = ReservationFactory::new(db, &venue, &court)
        .invitation_code("REJECTED")
        .build()
        .await?;
    let caller = factory::create_account(db).await?;
    factory::reservation_member::ReservationMemberFactory::new(db, reservation.id, caller.id)
        .status("REJECTED")
        .build()
        .await?;

    let result = MembershipService::new(db, &calendar)
        .join(caller.id, "REJECTED")
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReservationErr(ReservationError::NoPermission(_)))
    ));

    Ok(())
}
