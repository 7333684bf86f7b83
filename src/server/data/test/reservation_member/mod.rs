use crate::server::{
    data::reservation_member::ReservationMemberRepository,
    model::member::{MemberSource, MemberStatus, ReservationMember},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod browse_with_names;
