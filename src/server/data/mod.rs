//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one aggregate each and return domain
//! models. They are generic over `ConnectionTrait` so that services can run
//! several of them inside one `DatabaseTransaction`.

pub mod account;
pub mod court;
pub mod reservation;
pub mod reservation_member;
