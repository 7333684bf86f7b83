//! Reservation membership: joining by invitation code, leaving, rejecting
//! invitations and listing members.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        reservation::ReservationRepository, reservation_member::ReservationMemberRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::member::{MemberSource, MemberStatus, ReservationMember, ReservationMemberWithName},
    service::calendar::{CalendarDispatcher, CalendarEvent},
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
    calendar: &'a CalendarDispatcher,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection, calendar: &'a CalendarDispatcher) -> Self {
        Self { db, calendar }
    }

    /// Joins the reservation holding `invitation_code`.
    ///
    /// A pending invitation is accepted, a newcomer is added as joined, and a
    /// caller who already joined gets a successful no-op. Every actual join takes
    /// one vacancy slot.
    ///
    /// # Returns
    /// - `Err(NotFound)` - No reservation with that code
    /// - `Err(ReservationFull)` - No vacancy left, or the reservation is private
    /// - `Err(NoPermission)` - Caller rejected the invitation before
    pub async fn join(&self, caller_id: i32, invitation_code: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let reservation_repo = ReservationRepository::new(&txn);
        let member_repo = ReservationMemberRepository::new(&txn);

        let reservation = reservation_repo
            .read_by_code(invitation_code)
            .await?
            .ok_or_else(|| {
                ReservationError::NotFound(format!(
                    "No reservation with invitation code {}",
                    invitation_code
                ))
            })?;

        if reservation.vacancy <= 0 {
            return Err(ReservationError::ReservationFull.into());
        }

        match member_repo.read(reservation.id, caller_id).await? {
            Some(member) => match member.status {
                MemberStatus::Joined => return Ok(()),
                MemberStatus::Rejected => {
                    return Err(ReservationError::NoPermission(
                        "Invitation was already rejected".to_string(),
                    )
                    .into())
                }
                MemberStatus::Invited => {
                    member_repo
                        .set_status(reservation.id, caller_id, MemberStatus::Joined)
                        .await?;
                }
            },
            None => {
                member_repo
                    .add(ReservationMember::joiner(reservation.id, caller_id))
                    .await?;
            }
        }

        reservation_repo.adjust_vacancy(reservation.id, -1).await?;

        txn.commit().await?;

        self.calendar.dispatch(CalendarEvent::MemberAdded {
            reservation_id: reservation.id,
            account_id: caller_id,
        });

        Ok(())
    }

    /// Leaves a reservation.
    ///
    /// The last remaining membership row takes the whole reservation with it,
    /// whoever holds it. Otherwise only the caller's row goes, and a joined
    /// player leaving a public reservation gives the slot back.
    ///
    /// # Returns
    /// - `Err(NotFound)` - Caller is not a member
    pub async fn leave(&self, caller_id: i32, reservation_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let reservation_repo = ReservationRepository::new(&txn);
        let member_repo = ReservationMemberRepository::new(&txn);

        let member = member_repo
            .read(reservation_id, caller_id)
            .await?
            .ok_or_else(|| not_a_member(caller_id, reservation_id))?;

        if member_repo.count(reservation_id).await? <= 1 {
            reservation_repo.delete(reservation_id).await?;
            txn.commit().await?;

            tracing::info!(
                "Reservation {} deleted after its last member {} left",
                reservation_id,
                caller_id
            );
            return Ok(());
        }

        member_repo.remove(reservation_id, caller_id).await?;

        if member.status == MemberStatus::Joined && !member.is_manager {
            let reservation = reservation_repo.read(reservation_id).await?;
            if reservation.is_some_and(|r| !r.is_private()) {
                reservation_repo.adjust_vacancy(reservation_id, 1).await?;
            }
        }

        txn.commit().await?;

        Ok(())
    }

    /// Declines a pending invitation. The row is kept with status rejected.
    ///
    /// # Returns
    /// - `Err(NotFound)` - Caller has no membership row
    /// - `Err(NoPermission)` - Caller is the manager, already answered, or was
    ///   not invited by code
    pub async fn reject(&self, caller_id: i32, reservation_id: i32) -> Result<(), AppError> {
        let member_repo = ReservationMemberRepository::new(self.db);

        let member = member_repo
            .read(reservation_id, caller_id)
            .await?
            .ok_or_else(|| not_a_member(caller_id, reservation_id))?;

        if member.is_manager
            || member.status != MemberStatus::Invited
            || member.source != MemberSource::InvitationCode
        {
            return Err(ReservationError::NoPermission(
                "Only a pending invitation can be rejected".to_string(),
            )
            .into());
        }

        member_repo
            .set_status(reservation_id, caller_id, MemberStatus::Rejected)
            .await?;

        Ok(())
    }

    /// Lists the members of a reservation. Private reservations only show their
    /// members to members.
    pub async fn browse_members(
        &self,
        caller_id: i32,
        reservation_id: i32,
    ) -> Result<Vec<ReservationMemberWithName>, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .read(reservation_id)
            .await?
            .ok_or_else(|| {
                ReservationError::NotFound(format!("Reservation {} not found", reservation_id))
            })?;

        let members = ReservationMemberRepository::new(self.db)
            .browse_with_names(reservation_id)
            .await?;

        if reservation.is_private() && !members.iter().any(|m| m.member.account_id == caller_id) {
            return Err(ReservationError::NoPermission(
                "Members of a private reservation are only visible to its members".to_string(),
            )
            .into());
        }

        Ok(members)
    }
}

fn not_a_member(caller_id: i32, reservation_id: i32) -> ReservationError {
    ReservationError::NotFound(format!(
        "Account {} is not a member of reservation {}",
        caller_id, reservation_id
    ))
}
