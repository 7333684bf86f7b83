use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000002_create_stadium_table::Stadium, m20240301_000003_create_venue_table::Venue,
    m20240301_000004_create_court_table::Court,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::CourtId))
                    .col(integer(Reservation::VenueId))
                    .col(integer(Reservation::StadiumId))
                    .col(timestamp_with_time_zone(Reservation::StartTime))
                    .col(timestamp_with_time_zone(Reservation::EndTime))
                    .col(string(Reservation::TechnicalLevels).default(""))
                    .col(string_uniq(Reservation::InvitationCode))
                    .col(text_null(Reservation::Remark))
                    .col(integer(Reservation::MemberCount))
                    .col(integer(Reservation::Vacancy).default(-1))
                    .col(boolean(Reservation::IsCancelled).default(false))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_court_id")
                            .from(Reservation::Table, Reservation::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_venue_id")
                            .from(Reservation::Table, Reservation::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_stadium_id")
                            .from(Reservation::Table, Reservation::StadiumId)
                            .to(Stadium::Table, Stadium::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict lookups always filter by court and time
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_court_time")
                    .table(Reservation::Table)
                    .col(Reservation::CourtId)
                    .col(Reservation::StartTime)
                    .col(Reservation::EndTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    CourtId,
    VenueId,
    StadiumId,
    StartTime,
    EndTime,
    TechnicalLevels,
    InvitationCode,
    Remark,
    MemberCount,
    Vacancy,
    IsCancelled,
    CreatedAt,
}
