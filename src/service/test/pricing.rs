use crate::{
    config::BookingPolicy,
    error::AppError,
    model::room::Room,
    service::pricing::{PricedAmenity, PricingEngine},
};
use chrono::{NaiveDate, Utc};

fn room(price_per_night_cents: i64) -> Room {
    Room {
        id: 1,
        room_number: "R101".to_string(),
        price_per_night_cents,
        max_adults: 2,
        max_children: 2,
        status: "available".to_string(),
        created_at: Utc::now(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tests the price breakdown for a three-night stay with amenities.
///
/// A room at 100000 cents per night for three nights plus two units of a
/// 20000-cent amenity totals 340000 cents, with a 30% downpayment of
/// 102000 cents.
///
/// Expected: Ok with the full breakdown
#[test]
fn computes_three_night_total_with_amenities() {
    let engine = PricingEngine::new(BookingPolicy::default());

    let quote = engine
        .quote(
            &room(100_000),
            date(2026, 9, 10),
            date(2026, 9, 13),
            2,
            0,
            &[PricedAmenity {
                amenity_id: 1,
                quantity: 2,
                unit_price_cents: 20_000,
            }],
        )
        .unwrap();

    assert_eq!(quote.nights, 3);
    assert_eq!(quote.room_rate_cents, 300_000);
    assert_eq!(quote.amenity_total_cents, 40_000);
    assert_eq!(quote.total_cents, 340_000);
    assert_eq!(quote.downpayment_cents, 102_000);
}

/// Tests that a zero-night stay is rejected.
///
/// Expected: Err(AppError::Validation)
#[test]
fn rejects_zero_night_stay() {
    let engine = PricingEngine::new(BookingPolicy::default());

    let result = engine.quote(&room(100_000), date(2026, 9, 10), date(2026, 9, 10), 2, 0, &[]);

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that check-out before check-in is rejected.
///
/// Expected: Err(AppError::Validation)
#[test]
fn rejects_inverted_dates() {
    let engine = PricingEngine::new(BookingPolicy::default());

    let result = engine.quote(&room(100_000), date(2026, 9, 12), date(2026, 9, 10), 2, 0, &[]);

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that guest counts above room capacity are rejected.
///
/// Expected: Err(AppError::Validation)
#[test]
fn rejects_guests_over_capacity() {
    let engine = PricingEngine::new(BookingPolicy::default());

    let result = engine.quote(&room(100_000), date(2026, 9, 10), date(2026, 9, 12), 3, 2, &[]);

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that a booking without adults is rejected.
///
/// Expected: Err(AppError::Validation)
#[test]
fn rejects_zero_adults() {
    let engine = PricingEngine::new(BookingPolicy::default());

    let result = engine.quote(&room(100_000), date(2026, 9, 10), date(2026, 9, 12), 0, 1, &[]);

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that amenity quantities below one are rejected.
///
/// Expected: Err(AppError::Validation)
#[test]
fn rejects_zero_amenity_quantity() {
    let engine = PricingEngine::new(BookingPolicy::default());

    let result = engine.quote(
        &room(100_000),
        date(2026, 9, 10),
        date(2026, 9, 12),
        2,
        0,
        &[PricedAmenity {
            amenity_id: 1,
            quantity: 0,
            unit_price_cents: 5_000,
        }],
    );

    assert!(matches!(result, Err(AppError::Validation(_))));
}

/// Tests that the downpayment rounds half up on fractional cents.
///
/// 30% of 105 cents is 31.5, which rounds to 32; 30% of 101 cents is 30.3,
/// which rounds to 30.
///
/// Expected: rounded downpayments
#[test]
fn downpayment_rounds_half_up() {
    let engine = PricingEngine::new(BookingPolicy::default());

    assert_eq!(engine.downpayment(105), 32);
    assert_eq!(engine.downpayment(101), 30);
    assert_eq!(engine.downpayment(100), 30);
    assert_eq!(engine.downpayment(0), 0);
}
