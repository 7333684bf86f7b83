use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::court::{Court, Stadium, Venue};

pub struct CourtRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourtRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a court by id. Unpublished courts are only returned with `include_unpublished`.
    pub async fn read(
        &self,
        court_id: i32,
        include_unpublished: bool,
    ) -> Result<Option<Court>, DbErr> {
        let mut query = entity::prelude::Court::find_by_id(court_id);
        if !include_unpublished {
            query = query.filter(entity::court::Column::IsPublished.eq(true));
        }

        Ok(query.one(self.db).await?.map(Court::from_entity))
    }

    /// Gets the courts of a venue ordered by court number.
    pub async fn browse_by_venue(
        &self,
        venue_id: i32,
        include_unpublished: bool,
    ) -> Result<Vec<Court>, DbErr> {
        let mut query = entity::prelude::Court::find()
            .filter(entity::court::Column::VenueId.eq(venue_id))
            .order_by_asc(entity::court::Column::Number);
        if !include_unpublished {
            query = query.filter(entity::court::Column::IsPublished.eq(true));
        }

        let courts = query.all(self.db).await?;

        Ok(courts.into_iter().map(Court::from_entity).collect())
    }
}

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn read(&self, venue_id: i32) -> Result<Option<Venue>, DbErr> {
        let venue = entity::prelude::Venue::find_by_id(venue_id)
            .one(self.db)
            .await?;

        Ok(venue.map(Venue::from_entity))
    }
}

pub struct StadiumRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StadiumRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn read(&self, stadium_id: i32) -> Result<Option<Stadium>, DbErr> {
        let stadium = entity::prelude::Stadium::find_by_id(stadium_id)
            .one(self.db)
            .await?;

        Ok(stadium.map(Stadium::from_entity))
    }
}
