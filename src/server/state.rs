//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: the database connection is
//! a pool handle and the dispatcher wraps a channel sender.

use sea_orm::DatabaseConnection;

use crate::server::service::calendar::CalendarDispatcher;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool shared with the session store.
    pub db: DatabaseConnection,

    /// Queue of calendar events consumed by the background calendar worker.
    pub calendar: CalendarDispatcher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, calendar: CalendarDispatcher) -> Self {
        Self { db, calendar }
    }
}
