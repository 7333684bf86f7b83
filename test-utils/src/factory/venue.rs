//! Venue factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    stadium_id: i32,
    name: String,
    sport_id: i32,
    court_type: String,
}

impl<'a> VenueFactory<'a> {
    /// Defaults: name `Venue {n}`, sport 1, court type `badminton court`.
    pub fn new(db: &'a DatabaseConnection, stadium_id: i32) -> Self {
        Self {
            db,
            stadium_id,
            name: format!("Venue {}", next_id()),
            sport_id: 1,
            court_type: "badminton court".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sport_id(mut self, sport_id: i32) -> Self {
        self.sport_id = sport_id;
        self
    }

    pub fn court_type(mut self, court_type: impl Into<String>) -> Self {
        self.court_type = court_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            stadium_id: ActiveValue::Set(self.stadium_id),
            name: ActiveValue::Set(self.name),
            sport_id: ActiveValue::Set(self.sport_id),
            court_type: ActiveValue::Set(self.court_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_venue(
    db: &DatabaseConnection,
    stadium_id: i32,
) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db, stadium_id).build().await
}
