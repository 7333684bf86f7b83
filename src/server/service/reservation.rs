//! Reservation lifecycle: booking, editing, cancelling, deleting and browsing.
//!
//! Every check that guards a write runs inside the same transaction as the write,
//! so a concurrent booking cannot slip in between the conflict check and the insert.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        account::AccountRepository,
        court::{CourtRepository, StadiumRepository, VenueRepository},
        reservation::ReservationRepository,
        reservation_member::ReservationMemberRepository,
    },
    error::{reservation::ReservationError, AppError},
    model::{
        member::ReservationMember,
        reservation::{
            BrowseReservationParams, CreateReservationParams, EditReservationParams,
            NewReservation, PaginatedReservations, Reservation, ReservationWithMembers,
            UpdateReservationParams, PRIVATE_VACANCY,
        },
        time_range::DateTimeRange,
    },
    service::{
        availability::AvailabilityService,
        calendar::{court_location, CalendarDispatcher, CalendarEvent},
        invitation_code::generate_invitation_code,
    },
};

/// Attempts at drawing an unused invitation code before giving up.
const CODE_ATTEMPTS: usize = 5;

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    calendar: &'a CalendarDispatcher,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, calendar: &'a CalendarDispatcher) -> Self {
        Self { db, calendar }
    }

    /// Books a court and makes the caller its manager.
    ///
    /// Other listed accounts are recorded as pending invitations.
    ///
    /// # Returns
    /// - `Ok(id)` - Id of the new reservation
    /// - `Err(NoPermission)` - Caller is not among `member_ids`
    /// - `Err(NotFound)` - Court is missing or unpublished
    /// - `Err(CourtReserved)` - A live reservation overlaps the range
    /// - `Err(IllegalInput)` - Start in the past, empty range or invalid vacancy
    pub async fn create(
        &self,
        caller_id: i32,
        now: DateTime<Utc>,
        params: CreateReservationParams,
    ) -> Result<i32, AppError> {
        if !params.member_ids.contains(&caller_id) {
            return Err(ReservationError::NoPermission(
                "Caller must be a member of the reservation".to_string(),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        let court = CourtRepository::new(&txn)
            .read(params.court_id, false)
            .await?
            .ok_or_else(|| court_not_found(params.court_id))?;

        let conflicts = AvailabilityService::new(&txn)
            .find_conflicts(court.id, &params.range, None)
            .await?;
        if !conflicts.is_empty() {
            return Err(ReservationError::CourtReserved.into());
        }

        validate_slot(&params.range, params.vacancy, now)?;

        let venue = VenueRepository::new(&txn)
            .read(court.venue_id)
            .await?
            .ok_or_else(|| {
                ReservationError::NotFound(format!("Venue {} not found", court.venue_id))
            })?;

        let reservation_repo = ReservationRepository::new(&txn);
        let mut invitation_code = None;
        for _ in 0..CODE_ATTEMPTS {
            let code = generate_invitation_code();
            if reservation_repo.read_by_code(&code).await?.is_none() {
                invitation_code = Some(code);
                break;
            }
        }
        let invitation_code = invitation_code.ok_or_else(|| {
            AppError::InternalError("Failed to draw an unused invitation code".to_string())
        })?;

        let reservation = reservation_repo
            .add(NewReservation {
                court_id: court.id,
                venue_id: venue.id,
                stadium_id: venue.stadium_id,
                range: params.range,
                technical_levels: params.technical_levels,
                invitation_code,
                remark: params.remark,
                member_count: params.member_count,
                vacancy: params.vacancy,
            })
            .await?;

        let mut members = vec![ReservationMember::manager(reservation.id, caller_id)];
        for account_id in params.member_ids {
            if !members.iter().any(|m| m.account_id == account_id) {
                members.push(ReservationMember::invitee(reservation.id, account_id));
            }
        }
        ReservationMemberRepository::new(&txn)
            .add_many(members)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Account {} booked court {} as reservation {}",
            caller_id,
            court.id,
            reservation.id
        );

        Ok(reservation.id)
    }

    /// Gets a reservation with its members.
    pub async fn read(&self, reservation_id: i32) -> Result<ReservationWithMembers, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .read(reservation_id)
            .await?
            .ok_or_else(|| reservation_not_found(reservation_id))?;
        let members = ReservationMemberRepository::new(self.db)
            .browse_with_names(reservation_id)
            .await?;

        Ok(ReservationWithMembers {
            reservation,
            members,
        })
    }

    pub async fn read_by_code(&self, invitation_code: &str) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .read_by_code(invitation_code)
            .await?
            .ok_or_else(|| {
                ReservationError::NotFound(format!(
                    "No reservation with invitation code {}",
                    invitation_code
                ))
            })?;

        Ok(reservation)
    }

    pub async fn browse(
        &self,
        params: BrowseReservationParams,
    ) -> Result<PaginatedReservations, AppError> {
        let (reservations, total_count) =
            ReservationRepository::new(self.db).browse(&params).await?;

        Ok(PaginatedReservations {
            reservations,
            total_count,
            limit: params.limit,
            offset: params.offset,
        })
    }

    /// Applies a partial update on behalf of the reservation's manager.
    ///
    /// Court and times fall back to the stored values when absent, and the
    /// resulting slot is checked like a new booking, ignoring the reservation
    /// itself. A manager with a linked calendar gets the calendar event moved.
    pub async fn edit(
        &self,
        caller_id: i32,
        now: DateTime<Utc>,
        reservation_id: i32,
        params: EditReservationParams,
    ) -> Result<Reservation, AppError> {
        self.require_manager(caller_id, reservation_id).await?;

        let txn = self.db.begin().await?;

        let reservation_repo = ReservationRepository::new(&txn);
        let current = reservation_repo
            .read(reservation_id)
            .await?
            .ok_or_else(|| reservation_not_found(reservation_id))?;

        let (court_id, range) = params.effective_slot(&current);
        let court = CourtRepository::new(&txn)
            .read(court_id, false)
            .await?
            .ok_or_else(|| court_not_found(court_id))?;
        let venue = VenueRepository::new(&txn)
            .read(court.venue_id)
            .await?
            .ok_or_else(|| {
                ReservationError::NotFound(format!("Venue {} not found", court.venue_id))
            })?;

        validate_slot(&range, params.vacancy.unwrap_or(current.vacancy), now)?;

        let conflicts = AvailabilityService::new(&txn)
            .find_conflicts(court.id, &range, Some(reservation_id))
            .await?;
        if !conflicts.is_empty() {
            return Err(ReservationError::CourtReserved.into());
        }

        let updated = reservation_repo
            .edit(UpdateReservationParams {
                id: reservation_id,
                court_id: court.id,
                venue_id: venue.id,
                stadium_id: venue.stadium_id,
                range,
                vacancy: params.vacancy,
                technical_levels: params.technical_levels,
                remark: params.remark,
            })
            .await?;

        txn.commit().await?;

        let manager = AccountRepository::new(self.db).read(caller_id).await?;
        if manager.is_some_and(|m| m.is_google_login) {
            let stadium = StadiumRepository::new(self.db)
                .read(venue.stadium_id)
                .await?
                .ok_or_else(|| {
                    ReservationError::NotFound(format!("Stadium {} not found", venue.stadium_id))
                })?;

            self.calendar.dispatch(CalendarEvent::EventUpdated {
                reservation_id,
                location: court_location(&stadium, &venue, &court),
                start_time: range.start_time,
                end_time: range.end_time,
            });
        }

        Ok(updated)
    }

    /// Deletes a reservation and its memberships. Manager only.
    pub async fn delete(&self, caller_id: i32, reservation_id: i32) -> Result<(), AppError> {
        self.require_manager(caller_id, reservation_id).await?;

        let txn = self.db.begin().await?;
        ReservationRepository::new(&txn)
            .delete(reservation_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Account {} deleted reservation {}",
            caller_id,
            reservation_id
        );

        Ok(())
    }

    /// Marks a reservation cancelled, keeping it and its members.
    ///
    /// # Returns
    /// - `Err(NotFound)` - Caller is not a member
    /// - `Err(NoPermission)` - Caller is a member but not the manager
    pub async fn cancel(&self, caller_id: i32, reservation_id: i32) -> Result<(), AppError> {
        let member = ReservationMemberRepository::new(self.db)
            .read(reservation_id, caller_id)
            .await?
            .ok_or_else(|| {
                ReservationError::NotFound(format!(
                    "Account {} is not a member of reservation {}",
                    caller_id, reservation_id
                ))
            })?;

        if !member.is_manager {
            return Err(ReservationError::NoPermission(
                "Only the manager can cancel a reservation".to_string(),
            )
            .into());
        }

        ReservationRepository::new(self.db)
            .cancel(reservation_id)
            .await?;

        Ok(())
    }

    async fn require_manager(&self, caller_id: i32, reservation_id: i32) -> Result<(), AppError> {
        let member = ReservationMemberRepository::new(self.db)
            .read(reservation_id, caller_id)
            .await?;

        match member {
            Some(member) if member.is_manager => Ok(()),
            _ => Err(ReservationError::NoPermission(
                "Only the manager can change a reservation".to_string(),
            )
            .into()),
        }
    }
}

fn validate_slot(range: &DateTimeRange, vacancy: i32, now: DateTime<Utc>) -> Result<(), AppError> {
    if range.start_time < now {
        return Err(ReservationError::IllegalInput("Start time is in the past".to_string()).into());
    }
    if range.is_empty() {
        return Err(
            ReservationError::IllegalInput("Start time must be before end time".to_string()).into(),
        );
    }
    if vacancy < PRIVATE_VACANCY {
        return Err(ReservationError::IllegalInput(format!(
            "Vacancy must be at least {}",
            PRIVATE_VACANCY
        ))
        .into());
    }

    Ok(())
}

fn court_not_found(court_id: i32) -> ReservationError {
    ReservationError::NotFound(format!("Court {} not found", court_id))
}

fn reservation_not_found(reservation_id: i32) -> ReservationError {
    ReservationError::NotFound(format!("Reservation {} not found", reservation_id))
}
