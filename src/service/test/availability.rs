use crate::service::availability::AvailabilityChecker;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tests that a room with no reservations is available.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_available_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;

    let checker = AvailabilityChecker::new(db);
    let available = checker
        .is_available(room.id, date(2026, 5, 1), date(2026, 5, 3), None)
        .await?;

    assert!(available);

    Ok(())
}

/// Tests that a boundary touch makes the room unavailable.
///
/// An existing stay of May 1-3 blocks a candidate starting on May 3, the
/// turnover day included.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unavailable_on_boundary_touch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 1), date(2026, 5, 3))
        .build()
        .await?;

    let checker = AvailabilityChecker::new(db);
    let available = checker
        .is_available(room.id, date(2026, 5, 3), date(2026, 5, 5), None)
        .await?;

    assert!(!available);

    Ok(())
}

/// Tests that booked dates include both stay boundaries.
///
/// A stay of May 1-3 blocks May 1, 2, and 3.
///
/// Expected: Ok with all three dates
#[tokio::test]
async fn booked_dates_include_boundaries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 1), date(2026, 5, 3))
        .build()
        .await?;

    let checker = AvailabilityChecker::new(db);
    let dates: Vec<NaiveDate> = checker.booked_dates(room.id).await?.into_iter().collect();

    assert_eq!(
        dates,
        vec![date(2026, 5, 1), date(2026, 5, 2), date(2026, 5, 3)]
    );

    Ok(())
}

/// Tests that overlapping stays report each date once.
///
/// Expected: Ok with de-duplicated, ordered dates
#[tokio::test]
async fn booked_dates_deduplicate_overlaps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 1), date(2026, 5, 3))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 3), date(2026, 5, 4))
        .status("cancelled")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 6), date(2026, 5, 7))
        .build()
        .await?;

    let checker = AvailabilityChecker::new(db);
    let dates: Vec<NaiveDate> = checker.booked_dates(room.id).await?.into_iter().collect();

    // The cancelled stay contributes nothing.
    assert_eq!(
        dates,
        vec![
            date(2026, 5, 1),
            date(2026, 5, 2),
            date(2026, 5, 3),
            date(2026, 5, 6),
            date(2026, 5, 7),
        ]
    );

    Ok(())
}
