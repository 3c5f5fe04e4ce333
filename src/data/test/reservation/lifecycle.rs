use super::*;

/// Tests setting the lifecycle status.
///
/// Expected: Ok with the new status persisted
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .set_status(reservation.id, ReservationStatus::Confirmed)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Confirmed);

    Ok(())
}

/// Tests recording a check-in.
///
/// Verifies that the status, the acting staff identity, and the timestamp
/// land together.
///
/// Expected: Ok with check-in recorded
#[tokio::test]
async fn records_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let staff = factory::create_staff(db).await?;

    let now = Utc::now();
    let repo = ReservationRepository::new(db);
    let updated = repo.record_check_in(reservation.id, staff.id, now).await?;

    assert_eq!(updated.status, ReservationStatus::CheckedIn);
    assert_eq!(updated.checked_in_by, Some(staff.id));
    assert_eq!(updated.actual_check_in, Some(now));

    Ok(())
}

/// Tests recording a check-out.
///
/// Expected: Ok with check-out recorded
#[tokio::test]
async fn records_check_out() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let staff = factory::create_staff(db).await?;

    let now = Utc::now();
    let repo = ReservationRepository::new(db);
    let updated = repo.record_check_out(reservation.id, staff.id, now).await?;

    assert_eq!(updated.status, ReservationStatus::CheckedOut);
    assert_eq!(updated.checked_out_by, Some(staff.id));
    assert_eq!(updated.actual_check_out, Some(now));

    Ok(())
}

/// Tests recording a cancellation.
///
/// Verifies that the reason, the actor kind, and the timestamp are stored
/// alongside the status change.
///
/// Expected: Ok with cancellation recorded
#[tokio::test]
async fn records_cancellation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let now = Utc::now();
    let repo = ReservationRepository::new(db);
    let updated = repo
        .record_cancellation(reservation.id, "Change of plans", CancelledBy::User, now)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Cancelled);
    assert_eq!(updated.cancellation_reason, Some("Change of plans".to_string()));
    assert_eq!(updated.cancelled_by, Some(CancelledBy::User));
    assert_eq!(updated.cancelled_at, Some(now));

    Ok(())
}

/// Tests that updating an unknown reservation fails.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_on_unknown_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo.set_status(9999, ReservationStatus::Confirmed).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
