//! Reservation factory for creating test reservation entities.
//!
//! This module provides factory methods for creating reservation entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, user.id, room.id)
///     .dates(check_in, check_out)
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    room_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    num_adults: i32,
    num_children: i32,
    total_price_cents: i64,
    paid_amount_cents: i64,
    downpayment_cents: i64,
    payment_type: String,
    status: String,
    payment_status: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - check_in_date: 10 days from today
    /// - check_out_date: 12 days from today (two nights)
    /// - num_adults: `2`, num_children: `0`
    /// - total_price_cents: `200_000`
    /// - paid_amount_cents: `0`
    /// - downpayment_cents: `60_000`
    /// - payment_type: `"full_payment"`
    /// - status: `"pending"`, payment_status: `"not_paid"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the booking guest
    /// - `room_id` - ID of the booked room
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, room_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id,
            room_id,
            check_in_date: today + Days::new(10),
            check_out_date: today + Days::new(12),
            num_adults: 2,
            num_children: 0,
            total_price_cents: 200_000,
            paid_amount_cents: 0,
            downpayment_cents: 60_000,
            payment_type: "full_payment".to_string(),
            status: "pending".to_string(),
            payment_status: "not_paid".to_string(),
        }
    }

    /// Sets the stay date range.
    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in_date = check_in;
        self.check_out_date = check_out;
        self
    }

    /// Sets the guest counts.
    pub fn guests(mut self, num_adults: i32, num_children: i32) -> Self {
        self.num_adults = num_adults;
        self.num_children = num_children;
        self
    }

    /// Sets the total price in cents.
    pub fn total_price_cents(mut self, total: i64) -> Self {
        self.total_price_cents = total;
        self
    }

    /// Sets the accumulated paid amount in cents.
    pub fn paid_amount_cents(mut self, paid: i64) -> Self {
        self.paid_amount_cents = paid;
        self
    }

    /// Sets the downpayment in cents.
    pub fn downpayment_cents(mut self, downpayment: i64) -> Self {
        self.downpayment_cents = downpayment;
        self
    }

    /// Sets the payment type string.
    pub fn payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = payment_type.into();
        self
    }

    /// Sets the lifecycle status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the payment status string.
    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            num_adults: ActiveValue::Set(self.num_adults),
            num_children: ActiveValue::Set(self.num_children),
            total_price_cents: ActiveValue::Set(self.total_price_cents),
            paid_amount_cents: ActiveValue::Set(self.paid_amount_cents),
            downpayment_cents: ActiveValue::Set(self.downpayment_cents),
            payment_type: ActiveValue::Set(self.payment_type),
            status: ActiveValue::Set(self.status),
            payment_status: ActiveValue::Set(self.payment_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values.
///
/// Shorthand for `ReservationFactory::new(db, user_id, room_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the booking guest
/// - `room_id` - ID of the booked room
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, room_id).build().await
}
