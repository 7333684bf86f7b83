use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000003_create_venue_table::Venue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Court::Table)
                    .if_not_exists()
                    .col(pk_auto(Court::Id))
                    .col(integer(Court::VenueId))
                    .col(integer(Court::Number))
                    .col(boolean(Court::IsPublished).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_court_venue_id")
                            .from(Court::Table, Court::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Court::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Court {
    Table,
    Id,
    VenueId,
    Number,
    IsPublished,
}
