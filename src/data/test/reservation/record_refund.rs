use super::*;

/// Tests writing back a refund.
///
/// Verifies that the refunded amount, the gateway reference, and the new
/// payment status are persisted.
///
/// Expected: Ok with refund recorded
#[tokio::test]
async fn records_refund_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .status("cancelled")
        .paid_amount_cents(100_000)
        .payment_status("partially_paid")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .record_refund(
            reservation.id,
            100_000,
            Some("GW-12345".to_string()),
            PaymentStatus::Refunded,
        )
        .await?;

    assert_eq!(updated.refund_amount_cents, Some(100_000));
    assert_eq!(updated.refund_reference, Some("GW-12345".to_string()));
    assert_eq!(updated.payment_status, PaymentStatus::Refunded);
    // The paid amount stays as a historical record of what was collected.
    assert_eq!(updated.paid_amount_cents, 100_000);

    Ok(())
}
