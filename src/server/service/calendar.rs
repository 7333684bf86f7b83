//! Calendar side effects of reservation changes.
//!
//! Services never talk to the calendar provider directly. Once a transaction has
//! committed they push a `CalendarEvent` to the `CalendarDispatcher`; a background
//! worker drains the channel into a `CalendarNotifier`. Delivery failures are logged
//! and never reach the request that caused them.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::server::{
    error::AppError,
    model::court::{Court, Stadium, Venue},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarEvent {
    /// An account joined and should be added to the reservation's calendar event.
    MemberAdded {
        reservation_id: i32,
        account_id: i32,
    },
    /// The manager moved the reservation; the calendar event follows.
    EventUpdated {
        reservation_id: i32,
        location: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
}

/// Human readable place of a court, e.g. `Riverside Arena Hall A No.3 badminton court`.
pub fn court_location(stadium: &Stadium, venue: &Venue, court: &Court) -> String {
    format!(
        "{} {} No.{} {}",
        stadium.name, venue.name, court.number, venue.court_type
    )
}

/// Sending half of the calendar event queue, cloned into the application state.
#[derive(Clone)]
pub struct CalendarDispatcher {
    tx: mpsc::UnboundedSender<CalendarEvent>,
}

impl CalendarDispatcher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CalendarEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn dispatch(&self, event: CalendarEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Calendar worker is gone, dropping event {:?}", e.0);
        }
    }
}

#[async_trait]
pub trait CalendarNotifier: Send + Sync {
    async fn notify(&self, event: &CalendarEvent) -> Result<(), AppError>;
}

/// Posts each event as JSON to a configured endpoint.
pub struct WebhookCalendarNotifier {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl WebhookCalendarNotifier {
    pub fn new(client: reqwest::Client, url: reqwest::Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl CalendarNotifier for WebhookCalendarNotifier {
    async fn notify(&self, event: &CalendarEvent) -> Result<(), AppError> {
        self.client
            .post(self.url.clone())
            .json(event)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Used when no calendar endpoint is configured.
pub struct LogCalendarNotifier;

#[async_trait]
impl CalendarNotifier for LogCalendarNotifier {
    async fn notify(&self, event: &CalendarEvent) -> Result<(), AppError> {
        tracing::info!("Calendar event: {:?}", event);
        Ok(())
    }
}

/// Delivers queued events until every dispatcher has been dropped.
pub async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<CalendarEvent>,
    notifier: Arc<dyn CalendarNotifier>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = notifier.notify(&event).await {
            tracing::error!("Failed to deliver calendar event {:?}: {}", event, e);
        }
    }

    tracing::info!("Calendar worker stopped");
}
