use super::*;

/// Tests applying a payment to the reservation.
///
/// Verifies that the accumulated paid amount and the derived payment status
/// are persisted together.
///
/// Expected: Ok with amounts updated
#[tokio::test]
async fn sets_paid_amount_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .apply_payment(reservation.id, 60_000, PaymentStatus::PartiallyPaid)
        .await?;

    assert_eq!(updated.paid_amount_cents, 60_000);
    assert_eq!(updated.payment_status, PaymentStatus::PartiallyPaid);
    assert_eq!(updated.due_amount_cents(), 140_000);

    Ok(())
}

/// Tests that an overpaid amount is stored without clamping.
///
/// Expected: Ok with paid amount above the total and zero due
#[tokio::test]
async fn stores_overpayment_unclamped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .apply_payment(reservation.id, 250_000, PaymentStatus::FullyPaid)
        .await?;

    assert_eq!(updated.paid_amount_cents, 250_000);
    assert_eq!(updated.payment_status, PaymentStatus::FullyPaid);
    assert_eq!(updated.due_amount_cents(), 0);

    Ok(())
}
