use std::sync::Mutex;

use crate::service::collaborator::{Housekeeping, Notifier};

mod availability;
mod pricing;
mod refund;

/// Housekeeping collaborator that records the rooms it was signalled about.
#[derive(Default)]
struct RecordingHousekeeping {
    rooms: Mutex<Vec<i32>>,
}

impl Housekeeping for RecordingHousekeeping {
    fn room_needs_cleaning(&self, room_id: i32) {
        self.rooms.lock().unwrap().push(room_id);
    }
}

/// Notifier that records every message it was asked to deliver.
#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn reservation_created(&self, user_id: i32, reservation_id: i32, check_in: chrono::NaiveDate) {
        self.events
            .lock()
            .unwrap()
            .push(format!("created:{}:{}:{}", user_id, reservation_id, check_in));
    }

    fn reservation_confirmed(&self, user_id: i32, reservation_id: i32) {
        self.events
            .lock()
            .unwrap()
            .push(format!("confirmed:{}:{}", user_id, reservation_id));
    }

    fn reservation_cancelled(&self, user_id: i32, reservation_id: i32, refund_cents: i64) {
        self.events.lock().unwrap().push(format!(
            "cancelled:{}:{}:{}",
            user_id, reservation_id, refund_cents
        ));
    }
}
