//! HTTP request handlers.
//!
//! Write handlers authenticate the caller. Every handler converts DTOs into
//! service parameters, calls one service operation and converts the result
//! back into a DTO.

pub mod auth;
pub mod court;
pub mod health;
pub mod member;
pub mod reservation;
