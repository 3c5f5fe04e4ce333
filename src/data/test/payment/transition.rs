use super::*;

/// Tests completing a pending payment.
///
/// Expected: Ok with status completed and the payment time stamped
#[tokio::test]
async fn marks_payment_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let payment = factory::create_payment(db, reservation.id).await?;

    let now = Utc::now();
    let repo = PaymentRepository::new(db);
    let updated = repo.mark_completed(payment.id, now).await?;

    assert_eq!(updated.status, PaymentState::Completed);
    assert_eq!(updated.paid_at, Some(now));

    Ok(())
}

/// Tests failing a pending payment.
///
/// Expected: Ok with status failed and no payment time
#[tokio::test]
async fn marks_payment_failed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let payment = factory::create_payment(db, reservation.id).await?;

    let repo = PaymentRepository::new(db);
    let updated = repo.mark_failed(payment.id).await?;

    assert_eq!(updated.status, PaymentState::Failed);
    assert_eq!(updated.paid_at, None);

    Ok(())
}

/// Tests that transitions on an unknown payment fail.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_on_unknown_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_payment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let result = repo.mark_failed(9999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
