use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub court_id: i32,
    pub venue_id: i32,
    pub stadium_id: i32,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    /// Comma separated technical level codes, e.g. `ENTRY,ADVANCED`.
    pub technical_levels: String,
    #[sea_orm(unique)]
    pub invitation_code: String,
    pub remark: Option<String>,
    pub member_count: i32,
    /// Open slots; `-1` marks a private, invite-only reservation.
    pub vacancy: i32,
    pub is_cancelled: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::court::Entity",
        from = "Column::CourtId",
        to = "super::court::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Court,
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Venue,
    #[sea_orm(
        belongs_to = "super::stadium::Entity",
        from = "Column::StadiumId",
        to = "super::stadium::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Stadium,
    #[sea_orm(has_many = "super::reservation_member::Entity")]
    ReservationMember,
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Court.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::stadium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stadium.def()
    }
}

impl Related<super::reservation_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
