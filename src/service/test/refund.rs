use crate::{
    config::BookingPolicy,
    model::reservation::{PaymentStatus, PaymentType, Reservation, ReservationStatus},
    service::refund::RefundPolicy,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn reservation(check_in: NaiveDate, paid_cents: i64, status: ReservationStatus) -> Reservation {
    let now = Utc::now();
    Reservation {
        id: 1,
        user_id: 1,
        room_id: 1,
        check_in_date: check_in,
        check_out_date: check_in + chrono::Days::new(2),
        num_adults: 2,
        num_children: 0,
        total_price_cents: 340_000,
        paid_amount_cents: paid_cents,
        downpayment_cents: 102_000,
        payment_type: PaymentType::FullPayment,
        status,
        payment_status: PaymentStatus::PartiallyPaid,
        special_requests: None,
        cancellation_reason: None,
        cancelled_by: None,
        cancelled_at: None,
        actual_check_in: None,
        checked_in_by: None,
        actual_check_out: None,
        checked_out_by: None,
        refund_amount_cents: None,
        refund_reference: None,
        created_at: now,
        updated_at: now,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Tests a cancellation 30 hours before check-in midnight.
///
/// Expected: eligible for 100% of the paid amount
#[test]
fn full_refund_outside_cutoff() {
    let policy = RefundPolicy::new(BookingPolicy::default());
    let reservation = reservation(date(2026, 6, 10), 102_000, ReservationStatus::Confirmed);

    let eligibility = policy.evaluate(&reservation, at(2026, 6, 8, 18));

    assert!(eligibility.eligible);
    assert_eq!(eligibility.refund_amount_cents, 102_000);
    assert_eq!(eligibility.refund_percentage, 100);
    assert_eq!(eligibility.hours_until_check_in, Some(30.0));
    assert_eq!(eligibility.deadline, Some(at(2026, 6, 9, 0)));
}

/// Tests a cancellation 10 hours before check-in midnight.
///
/// Expected: ineligible, nothing refunded
#[test]
fn no_refund_inside_cutoff() {
    let policy = RefundPolicy::new(BookingPolicy::default());
    let reservation = reservation(date(2026, 6, 10), 102_000, ReservationStatus::Confirmed);

    let eligibility = policy.evaluate(&reservation, at(2026, 6, 9, 14));

    assert!(!eligibility.eligible);
    assert_eq!(eligibility.refund_amount_cents, 0);
    assert_eq!(eligibility.refund_percentage, 0);
    assert_eq!(eligibility.hours_until_check_in, Some(10.0));
    assert_eq!(eligibility.deadline, Some(at(2026, 6, 9, 0)));
}

/// Tests a cancellation exactly at the cutoff.
///
/// The window is strictly more than the cutoff, so exactly 24 hours out is
/// already too late.
///
/// Expected: ineligible
#[test]
fn cutoff_boundary_is_ineligible() {
    let policy = RefundPolicy::new(BookingPolicy::default());
    let reservation = reservation(date(2026, 6, 10), 102_000, ReservationStatus::Confirmed);

    let eligibility = policy.evaluate(&reservation, at(2026, 6, 9, 0));

    assert!(!eligibility.eligible);
    assert_eq!(eligibility.hours_until_check_in, Some(24.0));
}

/// Tests evaluating an already-cancelled reservation.
///
/// No recomputation happens: the answer is a fixed ineligible entitlement
/// with no timing details.
///
/// Expected: ineligible with reason "already cancelled"
#[test]
fn already_cancelled_short_circuits() {
    let policy = RefundPolicy::new(BookingPolicy::default());
    let reservation = reservation(date(2026, 6, 10), 102_000, ReservationStatus::Cancelled);

    let eligibility = policy.evaluate(&reservation, at(2026, 6, 1, 0));

    assert!(!eligibility.eligible);
    assert_eq!(eligibility.refund_amount_cents, 0);
    assert_eq!(eligibility.hours_until_check_in, None);
    assert_eq!(eligibility.deadline, None);
    assert_eq!(eligibility.reason, "already cancelled");
}

/// Tests that an unpaid reservation is still timing-eligible, for zero cents.
///
/// Expected: eligible with a zero refund
#[test]
fn unpaid_reservation_refunds_zero() {
    let policy = RefundPolicy::new(BookingPolicy::default());
    let reservation = reservation(date(2026, 6, 10), 0, ReservationStatus::Pending);

    let eligibility = policy.evaluate(&reservation, at(2026, 6, 1, 0));

    assert!(eligibility.eligible);
    assert_eq!(eligibility.refund_amount_cents, 0);
    assert_eq!(eligibility.refund_percentage, 100);
}
