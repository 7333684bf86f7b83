use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000002_create_stadium_table::Stadium;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_auto(Venue::Id))
                    .col(integer(Venue::StadiumId))
                    .col(string(Venue::Name))
                    .col(integer(Venue::SportId))
                    .col(string(Venue::CourtType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venue_stadium_id")
                            .from(Venue::Table, Venue::StadiumId)
                            .to(Stadium::Table, Stadium::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    StadiumId,
    Name,
    SportId,
    CourtType,
}
