//! Room availability checks.
//!
//! A room is available for a date range when no non-cancelled reservation
//! conflicts under the inclusive overlap rule: a stay ending on day D blocks
//! another stay starting on day D. Generic over the connection so the booking
//! service can re-run the check inside its creation transaction.

use chrono::{Days, NaiveDate};
use sea_orm::{ConnectionTrait, DbErr};
use std::collections::BTreeSet;

use crate::data::reservation::ReservationRepository;

pub struct AvailabilityChecker<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether the room is free for the given date range.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `check_in` / `check_out` - Candidate date range
    /// - `excluding` - Reservation ID to skip when re-validating a change
    ///
    /// # Returns
    /// - `Ok(true)` - No conflicting reservation exists
    /// - `Ok(false)` - At least one reservation conflicts
    /// - `Err(DbErr)` - Database error
    pub async fn is_available(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let overlapping = ReservationRepository::new(self.db)
            .count_overlapping(room_id, check_in, check_out, excluding)
            .await?;

        Ok(overlapping == 0)
    }

    /// All dates blocked on a room, both stay boundaries included.
    ///
    /// # Arguments
    /// - `room_id` - Room to inspect
    ///
    /// # Returns
    /// - `Ok(dates)` - Ordered, de-duplicated blocked dates
    /// - `Err(DbErr)` - Database error
    pub async fn booked_dates(&self, room_id: i32) -> Result<BTreeSet<NaiveDate>, DbErr> {
        let reservations = ReservationRepository::new(self.db)
            .get_active_for_room(room_id)
            .await?;

        let mut dates = BTreeSet::new();
        for reservation in reservations {
            let mut date = reservation.check_in_date;
            while date <= reservation.check_out_date {
                dates.insert(date);
                date = match date.checked_add_days(Days::new(1)) {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        Ok(dates)
    }
}
