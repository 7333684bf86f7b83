pub use super::account::Entity as Account;
pub use super::court::Entity as Court;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_member::Entity as ReservationMember;
pub use super::stadium::Entity as Stadium;
pub use super::venue::Entity as Venue;
