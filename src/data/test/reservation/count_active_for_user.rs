use super::*;

/// Tests that only pending and confirmed reservations count toward the cap.
///
/// A user with one reservation in each of pending, confirmed, cancelled, and
/// checked_out holds two active reservations.
///
/// Expected: Ok with count 2
#[tokio::test]
async fn counts_pending_and_confirmed_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    for status in ["pending", "confirmed", "cancelled", "checked_out"] {
        factory::reservation::ReservationFactory::new(db, user.id, room.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let count = repo.count_active_for_user(user.id).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests that other users' reservations are not counted.
///
/// Expected: Ok with count 0
#[tokio::test]
async fn scopes_count_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    factory::create_reservation(db, other.id, room.id).await?;

    let repo = ReservationRepository::new(db);
    let count = repo.count_active_for_user(user.id).await?;

    assert_eq!(count, 0);

    Ok(())
}
