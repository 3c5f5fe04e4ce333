use super::*;

/// Tests creating a new reservation without amenities.
///
/// Verifies that the repository creates the record in `pending` with an empty
/// payment trail: nothing paid, payment status `not_paid`.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_reservation_in_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(params(
            user.id,
            room.id,
            date(2026, 9, 10),
            date(2026, 9, 12),
        ))
        .await?;

    assert_eq!(reservation.user_id, user.id);
    assert_eq!(reservation.room_id, room.id);
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.payment_status, PaymentStatus::NotPaid);
    assert_eq!(reservation.paid_amount_cents, 0);
    assert_eq!(reservation.total_price_cents, 200_000);
    assert_eq!(reservation.nights(), 2);

    Ok(())
}

/// Tests creating a reservation with amenity lines.
///
/// Verifies that the amenity lines are stored with the quantity and the unit
/// price captured at booking time.
///
/// Expected: Ok with reservation and amenity lines created
#[tokio::test]
async fn creates_amenity_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let amenity = factory::create_amenity(db).await?;

    let mut create_params = params(user.id, room.id, date(2026, 9, 10), date(2026, 9, 12));
    create_params.amenities = vec![AmenityLine {
        amenity_id: amenity.id,
        quantity: 3,
        unit_price_cents: amenity.price_cents,
    }];

    let repo = ReservationRepository::new(db);
    let reservation = repo.create(create_params).await?;

    let lines = repo.get_amenity_lines(reservation.id).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].amenity_id, amenity.id);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].unit_price_cents, amenity.price_cents);

    Ok(())
}
