pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_account_table;
mod m20240301_000002_create_stadium_table;
mod m20240301_000003_create_venue_table;
mod m20240301_000004_create_court_table;
mod m20240302_000005_create_reservation_table;
mod m20240302_000006_create_reservation_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_account_table::Migration),
            Box::new(m20240301_000002_create_stadium_table::Migration),
            Box::new(m20240301_000003_create_venue_table::Migration),
            Box::new(m20240301_000004_create_court_table::Migration),
            Box::new(m20240302_000005_create_reservation_table::Migration),
            Box::new(m20240302_000006_create_reservation_member_table::Migration),
        ]
    }
}
