use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_account_table::Account,
    m20240302_000005_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationMember::Table)
                    .if_not_exists()
                    .col(integer(ReservationMember::ReservationId))
                    .col(integer(ReservationMember::AccountId))
                    .col(boolean(ReservationMember::IsManager).default(false))
                    .col(string(ReservationMember::Status))
                    .col(string(ReservationMember::Source))
                    .primary_key(
                        Index::create()
                            .col(ReservationMember::ReservationId)
                            .col(ReservationMember::AccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_member_reservation_id")
                            .from(ReservationMember::Table, ReservationMember::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_member_account_id")
                            .from(ReservationMember::Table, ReservationMember::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationMember {
    Table,
    ReservationId,
    AccountId,
    IsManager,
    Status,
    Source,
}
