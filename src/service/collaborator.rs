//! Outbound collaborator seams.
//!
//! The booking engine signals housekeeping and guest notifications but owns
//! neither. Both seams are fire-and-forget: a collaborator failure must never
//! fail the booking operation that triggered it, so the trait methods are
//! infallible and implementations swallow their own errors.

use chrono::NaiveDate;

/// Receives the signal that a room needs cleaning after a check-out.
pub trait Housekeeping: Send + Sync {
    fn room_needs_cleaning(&self, room_id: i32);
}

/// Delivers guest-facing messages about reservation events.
pub trait Notifier: Send + Sync {
    fn reservation_created(&self, user_id: i32, reservation_id: i32, check_in: NaiveDate);

    fn reservation_confirmed(&self, user_id: i32, reservation_id: i32);

    fn reservation_cancelled(&self, user_id: i32, reservation_id: i32, refund_cents: i64);
}

/// Default housekeeping collaborator that only logs the signal.
pub struct LogHousekeeping;

impl Housekeeping for LogHousekeeping {
    fn room_needs_cleaning(&self, room_id: i32) {
        tracing::info!("Room {} needs cleaning", room_id);
    }
}

/// Default notifier that only logs the message.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn reservation_created(&self, user_id: i32, reservation_id: i32, check_in: NaiveDate) {
        tracing::info!(
            "Notify user {}: reservation {} created, check-in {}",
            user_id,
            reservation_id,
            check_in
        );
    }

    fn reservation_confirmed(&self, user_id: i32, reservation_id: i32) {
        tracing::info!(
            "Notify user {}: reservation {} confirmed",
            user_id,
            reservation_id
        );
    }

    fn reservation_cancelled(&self, user_id: i32, reservation_id: i32, refund_cents: i64) {
        tracing::info!(
            "Notify user {}: reservation {} cancelled, refund {} cents",
            user_id,
            reservation_id,
            refund_cents
        );
    }
}
