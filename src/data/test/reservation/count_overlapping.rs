use super::*;

/// Tests that a stay ending on day D blocks another starting on day D.
///
/// An existing stay of May 1-3 must conflict with a candidate starting on
/// May 3 under the inclusive overlap rule.
///
/// Expected: Ok with count 1
#[tokio::test]
async fn counts_inclusive_boundary_overlap() -> Result<(), DbErr> {
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

    let repo = ReservationRepository::new(db);
    let count = repo
        .count_overlapping(room.id, date(2026, 5, 3), date(2026, 5, 5), None)
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that disjoint date ranges do not conflict.
///
/// Expected: Ok with count 0
#[tokio::test]
async fn ignores_disjoint_ranges() -> Result<(), DbErr> {
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

    let repo = ReservationRepository::new(db);
    let count = repo
        .count_overlapping(room.id, date(2026, 5, 4), date(2026, 5, 6), None)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that cancelled reservations release their dates.
///
/// Expected: Ok with count 0
#[tokio::test]
async fn ignores_cancelled_reservations() -> Result<(), DbErr> {
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
        .status("cancelled")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let count = repo
        .count_overlapping(room.id, date(2026, 5, 2), date(2026, 5, 4), None)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that the excluded reservation is skipped.
///
/// Re-validating a reservation against its own dates must not count itself
/// as a conflict.
///
/// Expected: Ok with count 0
#[tokio::test]
async fn skips_excluded_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 1), date(2026, 5, 3))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let count = repo
        .count_overlapping(
            room.id,
            date(2026, 5, 1),
            date(2026, 5, 3),
            Some(reservation.id),
        )
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that conflicts are scoped to the room.
///
/// Expected: Ok with count 0 for the other room
#[tokio::test]
async fn scopes_conflicts_to_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let other_room = factory::create_room(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .dates(date(2026, 5, 1), date(2026, 5, 3))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let count = repo
        .count_overlapping(other_room.id, date(2026, 5, 1), date(2026, 5, 3), None)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
