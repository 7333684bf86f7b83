//! Court factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CourtFactory<'a> {
    db: &'a DatabaseConnection,
    venue_id: i32,
    number: i32,
    is_published: bool,
}

impl<'a> CourtFactory<'a> {
    /// Defaults: a unique number, published.
    pub fn new(db: &'a DatabaseConnection, venue_id: i32) -> Self {
        Self {
            db,
            venue_id,
            number: next_id() as i32,
            is_published: true,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub async fn build(self) -> Result<entity::court::Model, DbErr> {
        entity::court::ActiveModel {
            venue_id: ActiveValue::Set(self.venue_id),
            number: ActiveValue::Set(self.number),
            is_published: ActiveValue::Set(self.is_published),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_court(
    db: &DatabaseConnection,
    venue_id: i32,
) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db, venue_id).build().await
}
