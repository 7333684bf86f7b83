use super::{at, range};
use crate::server::{error::AppError, service::availability::AvailabilityService};
use test_utils::{builder::TestBuilder, factory, factory::reservation::ReservationFactory};

mod find_first_available;
