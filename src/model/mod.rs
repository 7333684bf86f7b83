//! Data transfer objects shared by the HTTP API.
//!
//! Everything here is plain serde data with OpenAPI schemas. Server-side domain
//! models convert into these at the controller boundary.

pub mod account;
pub mod api;
pub mod court;
pub mod member;
pub mod reservation;
