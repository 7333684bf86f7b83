use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub nickname: String,
    pub is_google_login: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation_member::Entity")]
    ReservationMember,
}

impl Related<super::reservation_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
