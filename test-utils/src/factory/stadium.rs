//! Stadium factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StadiumFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city_id: i32,
    district_id: i32,
}

impl<'a> StadiumFactory<'a> {
    /// Defaults: name `Stadium {n}`, city 1, district 1.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Stadium {}", next_id()),
            city_id: 1,
            district_id: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city_id(mut self, city_id: i32) -> Self {
        self.city_id = city_id;
        self
    }

    pub fn district_id(mut self, district_id: i32) -> Self {
        self.district_id = district_id;
        self
    }

    pub async fn build(self) -> Result<entity::stadium::Model, DbErr> {
        entity::stadium::ActiveModel {
            name: ActiveValue::Set(self.name),
            city_id: ActiveValue::Set(self.city_id),
            district_id: ActiveValue::Set(self.district_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_stadium(db: &DatabaseConnection) -> Result<entity::stadium::Model, DbErr> {
    StadiumFactory::new(db).build().await
}
