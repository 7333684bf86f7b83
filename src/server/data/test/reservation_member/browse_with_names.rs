use super::*;

/// Tests listing members with nicknames.
///
/// Expected: manager first, then the other members by account id, each with the
/// account nickname
#[tokio::test]
async fn lists_manager_first_with_nicknames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
    let reservation = factory::create_reservation(db, &venue, &court).await?;
    let first = factory::account::AccountFactory::new(db)
        .nickname("Amy")
        .build()
        .await?;
    let second = factory::account::AccountFactory::new(db)
        .nickname("Ben")
        .build()
        .await?;
    let manager = factory::account::AccountFactory::new(db)
        .nickname("Chen")
        .build()
        .await?;

    factory::create_member(db, reservation.id, second.id).await?;
    factory::create_manager(db, reservation.id, manager.id).await?;
    factory::create_invitee(db, reservation.id, first.id).await?;

    let members = ReservationMemberRepository::new(db)
        .browse_with_names(reservation.id)
        .await?;

    let names: Vec<&str> = members.iter().map(|m| m.nickname.as_str()).collect();
    assert_eq!(names, vec!["Chen", "Amy", "Ben"]);
    assert!(members[0].member.is_manager);
    assert_eq!(members[1].member.status, MemberStatus::Invited);

    Ok(())
}
