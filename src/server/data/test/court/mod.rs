use crate::server::data::court::{CourtRepository, StadiumRepository, VenueRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
