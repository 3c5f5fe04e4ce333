use super::*;

/// Tests creating a pending payment when none exists.
///
/// Expected: Ok with payment created and no stale payment discarded
#[tokio::test]
async fn creates_pending_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let (payment, replaced) = repo
        .create_pending(reservation.id, 60_000, PaymentMethod::Gcash, None)
        .await?;

    assert!(!replaced);
    assert_eq!(payment.reservation_id, reservation.id);
    assert_eq!(payment.amount_cents, 60_000);
    assert_eq!(payment.method, PaymentMethod::Gcash);
    assert_eq!(payment.status, PaymentState::Pending);
    assert_eq!(payment.paid_at, None);

    Ok(())
}

/// Tests that a stale pending payment is discarded on retry.
///
/// At most one pending payment may exist per reservation, so creating a new
/// one deletes the previous pending attempt.
///
/// Expected: Ok with exactly one payment remaining
#[tokio::test]
async fn discards_stale_pending_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::create_payment(db, reservation.id).await?;

    let repo = PaymentRepository::new(db);
    let (payment, replaced) = repo
        .create_pending(reservation.id, 75_000, PaymentMethod::Card, None)
        .await?;

    assert!(replaced);
    let all = repo.get_by_reservation(reservation.id).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, payment.id);
    assert_eq!(all[0].amount_cents, 75_000);

    Ok(())
}

/// Tests that completed payments survive a new pending attempt.
///
/// Expected: Ok with the completed payment untouched
#[tokio::test]
async fn keeps_completed_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let completed = factory::payment::PaymentFactory::new(db, reservation.id)
        .status("completed")
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let (_payment, replaced) = repo
        .create_pending(reservation.id, 75_000, PaymentMethod::Cash, None)
        .await?;

    assert!(!replaced);
    let all = repo.get_by_reservation(reservation.id).await?;
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|p| p.id == completed.id));

    Ok(())
}
