use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    reservation::{
        encode_technical_levels, BrowseReservationParams, NewReservation, Reservation,
        ReservationSortBy, SortOrder, UpdateReservationParams,
    },
    time_range::DateTimeRange,
};

use entity::reservation::Column;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn read(&self, reservation_id: i32) -> Result<Option<Reservation>, DbErr> {
        entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    pub async fn read_by_code(&self, invitation_code: &str) -> Result<Option<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(Column::InvitationCode.eq(invitation_code))
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Gets the live reservations of a court overlapping `range`.
    ///
    /// `exclude` drops one reservation from the result, so an edited reservation
    /// never conflicts with itself.
    pub async fn find_conflicts(
        &self,
        court_id: i32,
        range: &DateTimeRange,
        exclude: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(Column::CourtId.eq(court_id))
            .filter(Column::IsCancelled.eq(false))
            .filter(overlapping(range))
            .order_by_asc(Column::StartTime);
        if let Some(reservation_id) = exclude {
            query = query.filter(Column::Id.ne(reservation_id));
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Gets every reservation of a court overlapping `range`, cancelled ones
    /// included, ordered by start time.
    pub async fn browse_by_court_between(
        &self,
        court_id: i32,
        range: &DateTimeRange,
    ) -> Result<Vec<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(Column::CourtId.eq(court_id))
            .filter(overlapping(range))
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Gets one page of reservations matching the filters together with the size
    /// of the whole filtered set.
    pub async fn browse(
        &self,
        params: &BrowseReservationParams,
    ) -> Result<(Vec<Reservation>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if params.city_id.is_some() || params.district_id.is_some() {
            let mut stadiums = Query::select();
            stadiums
                .column(entity::stadium::Column::Id)
                .from(entity::stadium::Entity);
            if let Some(city_id) = params.city_id {
                stadiums.and_where(entity::stadium::Column::CityId.eq(city_id));
            }
            if let Some(district_id) = params.district_id {
                stadiums.and_where(entity::stadium::Column::DistrictId.eq(district_id));
            }
            query = query.filter(Column::StadiumId.in_subquery(stadiums.to_owned()));
        }
        if let Some(sport_id) = params.sport_id {
            let venues = Query::select()
                .column(entity::venue::Column::Id)
                .from(entity::venue::Entity)
                .and_where(entity::venue::Column::SportId.eq(sport_id))
                .to_owned();
            query = query.filter(Column::VenueId.in_subquery(venues));
        }
        if let Some(stadium_id) = params.stadium_id {
            query = query.filter(Column::StadiumId.eq(stadium_id));
        }
        if let Some(court_id) = params.court_id {
            query = query.filter(Column::CourtId.eq(court_id));
        }
        if !params.time_ranges.is_empty() {
            let any_range = params
                .time_ranges
                .iter()
                .fold(Condition::any(), |cond, range| cond.add(overlapping(range)));
            query = query.filter(any_range);
        }
        if let Some(level) = params.technical_level {
            // Level codes never contain one another, so a substring match is exact
            query = query.filter(Column::TechnicalLevels.contains(level.as_str()));
        }
        match params.has_vacancy {
            Some(true) => query = query.filter(Column::Vacancy.gt(0)),
            Some(false) => query = query.filter(Column::Vacancy.lte(0)),
            None => {}
        }
        if let Some(is_cancelled) = params.is_cancelled {
            query = query.filter(Column::IsCancelled.eq(is_cancelled));
        }

        let total_count = query.clone().count(self.db).await?;

        let order = match params.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        let sort_column = match params.sort_by {
            ReservationSortBy::Time => Column::StartTime,
            ReservationSortBy::Vacancy => Column::Vacancy,
        };

        let reservations = query
            .order_by(sort_column, order.clone())
            .order_by(Column::Id, order)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((reservations, total_count))
    }

    pub async fn add(&self, params: NewReservation) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            court_id: ActiveValue::Set(params.court_id),
            venue_id: ActiveValue::Set(params.venue_id),
            stadium_id: ActiveValue::Set(params.stadium_id),
            start_time: ActiveValue::Set(params.range.start_time),
            end_time: ActiveValue::Set(params.range.end_time),
            technical_levels: ActiveValue::Set(encode_technical_levels(&params.technical_levels)),
            invitation_code: ActiveValue::Set(params.invitation_code),
            remark: ActiveValue::Set(params.remark),
            member_count: ActiveValue::Set(params.member_count),
            vacancy: ActiveValue::Set(params.vacancy),
            is_cancelled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Reservation::from_entity(reservation)
    }

    /// Applies an edit. Location and range are always written, the remaining
    /// fields only when present.
    pub async fn edit(&self, params: UpdateReservationParams) -> Result<Reservation, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Reservation with id {} not found", params.id))
            })?;

        let mut active_model = reservation.into_active_model();
        active_model.court_id = ActiveValue::Set(params.court_id);
        active_model.venue_id = ActiveValue::Set(params.venue_id);
        active_model.stadium_id = ActiveValue::Set(params.stadium_id);
        active_model.start_time = ActiveValue::Set(params.range.start_time);
        active_model.end_time = ActiveValue::Set(params.range.end_time);
        if let Some(vacancy) = params.vacancy {
            active_model.vacancy = ActiveValue::Set(vacancy);
        }
        if let Some(levels) = params.technical_levels {
            active_model.technical_levels = ActiveValue::Set(encode_technical_levels(&levels));
        }
        if let Some(remark) = params.remark {
            active_model.remark = ActiveValue::Set(remark);
        }

        let updated = active_model.update(self.db).await?;

        Reservation::from_entity(updated)
    }

    /// Deletes a reservation together with all of its membership rows.
    pub async fn delete(&self, reservation_id: i32) -> Result<(), DbErr> {
        entity::prelude::ReservationMember::delete_many()
            .filter(entity::reservation_member::Column::ReservationId.eq(reservation_id))
            .exec(self.db)
            .await?;

        entity::prelude::Reservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks a reservation cancelled. The row and its members are kept.
    pub async fn cancel(&self, reservation_id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::update_many()
            .filter(Column::Id.eq(reservation_id))
            .col_expr(Column::IsCancelled, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds `delta` to the stored vacancy in a single statement.
    pub async fn adjust_vacancy(&self, reservation_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::update_many()
            .filter(Column::Id.eq(reservation_id))
            .col_expr(Column::Vacancy, Expr::col(Column::Vacancy).add(delta))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

/// Rows whose `[start_time, end_time)` overlaps `range`.
fn overlapping(range: &DateTimeRange) -> Condition {
    Condition::all()
        .add(Column::StartTime.lt(range.end_time))
        .add(Column::EndTime.gt(range.start_time))
}
