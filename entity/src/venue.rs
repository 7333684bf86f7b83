use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub stadium_id: i32,
    pub name: String,
    pub sport_id: i32,
    pub court_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stadium::Entity",
        from = "Column::StadiumId",
        to = "super::stadium::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Stadium,
    #[sea_orm(has_many = "super::court::Entity")]
    Court,
}

impl Related<super::stadium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stadium.def()
    }
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Court.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
