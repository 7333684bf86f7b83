//! Reservation membership domain models.
//!
//! A membership moves through `Invited -> Joined` or `Invited -> Rejected`;
//! both `Joined` and `Rejected` are terminal. Exactly one member per reservation
//! is created as manager, the account that made the booking.

use sea_orm::DbErr;

pub use crate::model::member::{MemberSource, MemberStatus};
use crate::model::member::ReservationMemberDto;

impl MemberStatus {
    /// Column value stored in `reservation_member.status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "INVITED",
            Self::Joined => "JOINED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "INVITED" => Ok(Self::Invited),
            "JOINED" => Ok(Self::Joined),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(DbErr::Type(format!("Unknown member status '{}'", other))),
        }
    }
}

impl MemberSource {
    /// Column value stored in `reservation_member.source`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvitationCode => "INVITATION_CODE",
            Self::Other => "OTHER",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "INVITATION_CODE" => Ok(Self::InvitationCode),
            "OTHER" => Ok(Self::Other),
            other => Err(DbErr::Type(format!("Unknown member source '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationMember {
    pub reservation_id: i32,
    pub account_id: i32,
    pub is_manager: bool,
    pub status: MemberStatus,
    pub source: MemberSource,
}

impl ReservationMember {
    /// The booking account, recorded as the joined manager.
    pub fn manager(reservation_id: i32, account_id: i32) -> Self {
        Self {
            reservation_id,
            account_id,
            is_manager: true,
            status: MemberStatus::Joined,
            source: MemberSource::Other,
        }
    }

    /// An account listed at creation that still has to accept or reject.
    pub fn invitee(reservation_id: i32, account_id: i32) -> Self {
        Self {
            reservation_id,
            account_id,
            is_manager: false,
            status: MemberStatus::Invited,
            source: MemberSource::InvitationCode,
        }
    }

    /// An account that joined on its own with the invitation code.
    pub fn joiner(reservation_id: i32, account_id: i32) -> Self {
        Self {
            reservation_id,
            account_id,
            is_manager: false,
            status: MemberStatus::Joined,
            source: MemberSource::InvitationCode,
        }
    }

    pub fn from_entity(entity: entity::reservation_member::Model) -> Result<Self, DbErr> {
        Ok(Self {
            reservation_id: entity.reservation_id,
            account_id: entity.account_id,
            is_manager: entity.is_manager,
            status: MemberStatus::from_db(&entity.status)?,
            source: MemberSource::from_db(&entity.source)?,
        })
    }
}

/// Membership joined with the member's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationMemberWithName {
    pub member: ReservationMember,
    pub nickname: String,
}

impl ReservationMemberWithName {
    pub fn into_dto(self) -> ReservationMemberDto {
        ReservationMemberDto {
            reservation_id: self.member.reservation_id,
            account_id: self.member.account_id,
            nickname: self.nickname,
            is_manager: self.member.is_manager,
            status: self.member.status,
            source: self.member.source,
        }
    }
}
