use crate::server::{
    data::reservation::ReservationRepository,
    model::{
        reservation::{
            BrowseReservationParams, NewReservation, ReservationSortBy, SortOrder, TechnicalLevel,
            UpdateReservationParams,
        },
        time_range::DateTimeRange,
    },
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::reservation::ReservationFactory};

mod browse_by_court_between;

/// Hour `hour` of day `day` in May 2030.
fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 5, day, hour, 0, 0).unwrap()
}

fn range(day: u32, start_hour: u32, end_hour: u32) -> DateTimeRange {
    DateTimeRange::new(at(day, start_hour), at(day, end_hour))
}
