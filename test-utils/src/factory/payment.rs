//! Payment factory for creating test payment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    amount_cents: i64,
    method: String,
    status: String,
    reference: Option<String>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - amount_cents: `50_000`
    /// - method: `"cash"`
    /// - status: `"pending"`
    /// - reference: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `reservation_id` - Reservation the payment is made against
    ///
    /// # Returns
    /// - `PaymentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            amount_cents: 50_000,
            method: "cash".to_string(),
            status: "pending".to_string(),
            reference: None,
        }
    }

    /// Sets the payment amount in cents.
    pub fn amount_cents(mut self, amount: i64) -> Self {
        self.amount_cents = amount;
        self
    }

    /// Sets the payment method string.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the payment status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the gateway reference.
    pub fn reference(mut self, reference: Option<String>) -> Self {
        self.reference = reference;
        self
    }

    /// Builds and inserts the payment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::payment::Model)` - Created payment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            method: ActiveValue::Set(self.method),
            status: ActiveValue::Set(self.status),
            reference: ActiveValue::Set(self.reference),
            created_at: ActiveValue::Set(Utc::now()),
            paid_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending payment with default values.
///
/// Shorthand for `PaymentFactory::new(db, reservation_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `reservation_id` - Reservation the payment is made against
///
/// # Returns
/// - `Ok(entity::payment::Model)` - Created payment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_payment(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, reservation_id).build().await
}
