use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::member::{MemberStatus, ReservationMember, ReservationMemberWithName};

use entity::reservation_member::Column;

pub struct ReservationMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn read(
        &self,
        reservation_id: i32,
        account_id: i32,
    ) -> Result<Option<ReservationMember>, DbErr> {
        entity::prelude::ReservationMember::find_by_id((reservation_id, account_id))
            .one(self.db)
            .await?
            .map(ReservationMember::from_entity)
            .transpose()
    }

    /// Gets the members of a reservation with their nicknames, manager first.
    pub async fn browse_with_names(
        &self,
        reservation_id: i32,
    ) -> Result<Vec<ReservationMemberWithName>, DbErr> {
        let rows = entity::prelude::ReservationMember::find()
            .find_also_related(entity::prelude::Account)
            .filter(Column::ReservationId.eq(reservation_id))
            .order_by_desc(Column::IsManager)
            .order_by_asc(Column::AccountId)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(member, account)| {
                Ok(ReservationMemberWithName {
                    member: ReservationMember::from_entity(member)?,
                    nickname: account.map(|a| a.nickname).unwrap_or_default(),
                })
            })
            .collect()
    }

    pub async fn add(&self, member: ReservationMember) -> Result<(), DbErr> {
        entity::reservation_member::ActiveModel {
            reservation_id: ActiveValue::Set(member.reservation_id),
            account_id: ActiveValue::Set(member.account_id),
            is_manager: ActiveValue::Set(member.is_manager),
            status: ActiveValue::Set(member.status.as_str().to_string()),
            source: ActiveValue::Set(member.source.as_str().to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn add_many(&self, members: Vec<ReservationMember>) -> Result<(), DbErr> {
        for member in members {
            self.add(member).await?;
        }

        Ok(())
    }

    pub async fn set_status(
        &self,
        reservation_id: i32,
        account_id: i32,
        status: MemberStatus,
    ) -> Result<(), DbErr> {
        entity::prelude::ReservationMember::update_many()
            .filter(Column::ReservationId.eq(reservation_id))
            .filter(Column::AccountId.eq(account_id))
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn remove(&self, reservation_id: i32, account_id: i32) -> Result<(), DbErr> {
        entity::prelude::ReservationMember::delete_by_id((reservation_id, account_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Number of membership rows of a reservation, whatever their status.
    pub async fn count(&self, reservation_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ReservationMember::find()
            .filter(Column::ReservationId.eq(reservation_id))
            .count(self.db)
            .await
    }
}
