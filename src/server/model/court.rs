//! Court, venue and stadium domain models.
//!
//! A stadium holds venues, each venue is dedicated to one sport and holds
//! numbered courts. Reservations always target a single court.

use crate::model::court::CourtDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: i32,
    pub venue_id: i32,
    /// Court number shown to players, unique within its venue.
    pub number: i32,
    pub is_published: bool,
}

impl Court {
    pub fn from_entity(entity: entity::court::Model) -> Self {
        Self {
            id: entity.id,
            venue_id: entity.venue_id,
            number: entity.number,
            is_published: entity.is_published,
        }
    }

    pub fn into_dto(self) -> CourtDto {
        CourtDto {
            id: self.id,
            venue_id: self.venue_id,
            number: self.number,
            is_published: self.is_published,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i32,
    pub stadium_id: i32,
    pub name: String,
    pub sport_id: i32,
    /// Kind of court, such as "badminton court".
    pub court_type: String,
}

impl Venue {
    pub fn from_entity(entity: entity::venue::Model) -> Self {
        Self {
            id: entity.id,
            stadium_id: entity.stadium_id,
            name: entity.name,
            sport_id: entity.sport_id,
            court_type: entity.court_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stadium {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub district_id: i32,
}

impl Stadium {
    pub fn from_entity(entity: entity::stadium::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city_id: entity.city_id,
            district_id: entity.district_id,
        }
    }
}
