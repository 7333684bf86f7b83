//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They enforce the
//! reservation rules, own transaction boundaries and emit calendar events once
//! their writes have committed.

pub mod availability;
pub mod calendar;
pub mod court;
pub mod invitation_code;
pub mod membership;
pub mod reservation;
