//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a connection pool, the collaborators are
//! reference-counted trait objects, and `BookingPolicy` is `Copy`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    config::BookingPolicy,
    service::collaborator::{Housekeeping, Notifier},
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Booking-policy knobs injected into the services.
    pub policy: BookingPolicy,

    /// Housekeeping collaborator, informed when a room needs cleaning.
    pub housekeeping: Arc<dyn Housekeeping>,

    /// Notification collaborator for fire-and-forget guest messages.
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        policy: BookingPolicy,
        housekeeping: Arc<dyn Housekeeping>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            db,
            policy,
            housekeeping,
            notifier,
        }
    }
}
