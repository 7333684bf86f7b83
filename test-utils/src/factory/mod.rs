//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Foreign keys are enforced by
//! SQLite, so parents have to exist first; `helpers` builds whole hierarchies.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::create_account(db).await?;
//! let (stadium, venue, court) = factory::helpers::create_court_with_dependencies(db).await?;
//!
//! let reservation = factory::reservation::ReservationFactory::new(db, &venue, &court)
//!     .vacancy(0)
//!     .build()
//!     .await?;
//! factory::create_manager(db, reservation.id, account.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Accounts
//! - `stadium` - Stadiums
//! - `venue` - Venues inside a stadium
//! - `court` - Courts inside a venue
//! - `reservation` - Reservations on a court
//! - `reservation_member` - Membership rows
//! - `helpers` - Hierarchies with their dependencies

pub mod account;
pub mod court;
pub mod helpers;
pub mod reservation;
pub mod reservation_member;
pub mod stadium;
pub mod venue;

pub use account::create_account;
pub use court::create_court;
pub use reservation::create_reservation;
pub use reservation_member::{create_invitee, create_manager, create_member};
pub use stadium::create_stadium;
pub use venue::create_venue;
