//! Refund entitlement rules.
//!
//! The policy is binary: cancel more than the cutoff before check-in midnight
//! and every cent paid comes back, cancel later and nothing does. The engine
//! only computes the entitlement; moving money is the manual-refund
//! workflow's job.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::{
    config::BookingPolicy,
    model::reservation::{Reservation, ReservationStatus, RefundEligibility},
};

pub struct RefundPolicy {
    cutoff_hours: i64,
}

impl RefundPolicy {
    pub fn new(policy: BookingPolicy) -> Self {
        Self {
            cutoff_hours: policy.refund_cutoff_hours,
        }
    }

    /// Evaluates what a cancellation at `now` would refund.
    ///
    /// Must be called before the cancellation mutates the reservation, so the
    /// paid amount it reads is the pre-cancellation one. A reservation that
    /// is already cancelled gets a fixed ineligible answer with no
    /// recomputation.
    ///
    /// # Arguments
    /// - `reservation` - Reservation being cancelled
    /// - `now` - Evaluation instant
    ///
    /// # Returns
    /// - `RefundEligibility` - Entitlement, amount, and timing details
    pub fn evaluate(&self, reservation: &Reservation, now: DateTime<Utc>) -> RefundEligibility {
        if reservation.status == ReservationStatus::Cancelled {
            return RefundEligibility {
                eligible: false,
                refund_amount_cents: 0,
                refund_percentage: 0,
                hours_until_check_in: None,
                deadline: None,
                reason: "already cancelled".to_string(),
            };
        }

        let check_in_midnight = reservation
            .check_in_date
            .and_time(NaiveTime::MIN)
            .and_utc();
        let deadline = check_in_midnight - Duration::hours(self.cutoff_hours);
        let hours_until_check_in = (check_in_midnight - now).num_seconds() as f64 / 3600.0;

        if hours_until_check_in > self.cutoff_hours as f64 {
            RefundEligibility {
                eligible: true,
                refund_amount_cents: reservation.paid_amount_cents,
                refund_percentage: 100,
                hours_until_check_in: Some(hours_until_check_in),
                deadline: Some(deadline),
                reason: format!(
                    "cancelled more than {} hours before check-in",
                    self.cutoff_hours
                ),
            }
        } else {
            RefundEligibility {
                eligible: false,
                refund_amount_cents: 0,
                refund_percentage: 0,
                hours_until_check_in: Some(hours_until_check_in),
                deadline: Some(deadline),
                reason: format!("cancelled within {} hours of check-in", self.cutoff_hours),
            }
        }
    }
}
