//! Request-scoped helpers: typed session access and the authentication guard.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
