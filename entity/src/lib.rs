//! SeaORM entity models for the reservation database.

pub mod prelude;

pub mod account;
pub mod court;
pub mod reservation;
pub mod reservation_member;
pub mod stadium;
pub mod venue;
