use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stadium::Table)
                    .if_not_exists()
                    .col(pk_auto(Stadium::Id))
                    .col(string(Stadium::Name))
                    .col(integer(Stadium::CityId))
                    .col(integer(Stadium::DistrictId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stadium::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stadium {
    Table,
    Id,
    Name,
    CityId,
    DistrictId,
}
