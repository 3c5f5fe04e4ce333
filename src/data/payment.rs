//! Payment data repository for database operations.
//!
//! Manages individual payment attempts against reservations. The one rule
//! enforced at this layer is at-most-one-pending-payment per reservation:
//! creating a new pending payment first discards any stale one, which makes
//! caller retries safe.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::payment::{Payment, PaymentMethod, PaymentState};

/// Repository providing database operations for payments.
pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pending payment, discarding any stale pending payment
    /// for the same reservation first.
    ///
    /// # Arguments
    /// - `reservation_id` - Reservation the payment is made against
    /// - `amount_cents` - Payment amount in cents
    /// - `method` - Payment instrument
    /// - `reference` - Optional gateway reference
    ///
    /// # Returns
    /// - `Ok((payment, replaced))` - The created payment and whether a stale
    ///   pending payment was discarded
    /// - `Err(DbErr)` - Database error
    pub async fn create_pending(
        &self,
        reservation_id: i32,
        amount_cents: i64,
        method: PaymentMethod,
        reference: Option<String>,
    ) -> Result<(Payment, bool), DbErr> {
        let discarded = entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::ReservationId.eq(reservation_id))
            .filter(entity::payment::Column::Status.eq(PaymentState::Pending.as_str()))
            .exec(self.db)
            .await?;

        let payment = entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            amount_cents: ActiveValue::Set(amount_cents),
            method: ActiveValue::Set(method.as_str().to_string()),
            status: ActiveValue::Set(PaymentState::Pending.as_str().to_string()),
            reference: ActiveValue::Set(reference),
            created_at: ActiveValue::Set(Utc::now()),
            paid_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((Payment::from_entity(payment)?, discarded.rows_affected > 0))
    }

    /// Gets a payment by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
            .map(Payment::from_entity)
            .transpose()
    }

    /// Gets all payments for a reservation, oldest first.
    pub async fn get_by_reservation(&self, reservation_id: i32) -> Result<Vec<Payment>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect()
    }

    /// Marks a payment completed and stamps the payment time.
    pub async fn mark_completed(&self, id: i32, paid_at: DateTime<Utc>) -> Result<Payment, DbErr> {
        let mut active: entity::payment::ActiveModel = self.require(id).await?.into();
        active.status = ActiveValue::Set(PaymentState::Completed.as_str().to_string());
        active.paid_at = ActiveValue::Set(Some(paid_at));

        Payment::from_entity(active.update(self.db).await?)
    }

    /// Marks a payment failed. The reservation's paid amount is untouched.
    pub async fn mark_failed(&self, id: i32) -> Result<Payment, DbErr> {
        let mut active: entity::payment::ActiveModel = self.require(id).await?.into();
        active.status = ActiveValue::Set(PaymentState::Failed.as_str().to_string());

        Payment::from_entity(active.update(self.db).await?)
    }

    async fn require(&self, id: i32) -> Result<entity::payment::Model, DbErr> {
        entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Payment {} not found", id)))
    }
}
