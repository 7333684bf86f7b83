//! Reservation membership factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for membership rows. Status and source take the stored column values
/// (`JOINED`, `INVITATION_CODE`, ...).
pub struct ReservationMemberFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    account_id: i32,
    is_manager: bool,
    status: String,
    source: String,
}

impl<'a> ReservationMemberFactory<'a> {
    /// Defaults: a joined non-manager who came in with the invitation code.
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32, account_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            account_id,
            is_manager: false,
            status: "JOINED".to_string(),
            source: "INVITATION_CODE".to_string(),
        }
    }

    pub fn manager(mut self, is_manager: bool) -> Self {
        self.is_manager = is_manager;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub async fn build(self) -> Result<entity::reservation_member::Model, DbErr> {
        entity::reservation_member::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            account_id: ActiveValue::Set(self.account_id),
            is_manager: ActiveValue::Set(self.is_manager),
            status: ActiveValue::Set(self.status),
            source: ActiveValue::Set(self.source),
        }
        .insert(self.db)
        .await
    }
}

/// Creates the joined manager row of the booking account.
pub async fn create_manager(
    db: &DatabaseConnection,
    reservation_id: i32,
    account_id: i32,
) -> Result<entity::reservation_member::Model, DbErr> {
    ReservationMemberFactory::new(db, reservation_id, account_id)
        .manager(true)
        .source("OTHER")
        .build()
        .await
}

/// Creates a joined non-manager row.
pub async fn create_member(
    db: &DatabaseConnection,
    reservation_id: i32,
    account_id: i32,
) -> Result<entity::reservation_member::Model, DbErr> {
    ReservationMemberFactory::new(db, reservation_id, account_id)
        .build()
        .await
}

/// Creates a pending invitation.
pub async fn create_invitee(
    db: &DatabaseConnection,
    reservation_id: i32,
    account_id: i32,
) -> Result<entity::reservation_member::Model, DbErr> {
    ReservationMemberFactory::new(db, reservation_id, account_id)
        .status("INVITED")
        .build()
        .await
}
