//! Reservation data repository for database operations.
//!
//! Handles reservation creation (with amenity lines), overlap queries for
//! availability, the per-user active-reservation count, and the single-row
//! read-modify-write updates driven by the lifecycle and payment services.
//! Status strings are converted to typed enums at this boundary.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::reservation::{
    AmenityLine, CancelledBy, CreateReservationParams, PaymentStatus, Reservation,
    ReservationStatus,
};

/// Repository providing database operations for reservations.
///
/// Generic over the connection so callers can run operations inside a
/// transaction when several writes must land together.
pub struct ReservationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new reservation in `pending` together with its amenity lines.
    ///
    /// Callers needing atomicity with the availability check must pass a
    /// transaction connection; this method performs no check of its own.
    ///
    /// # Arguments
    /// - `params` - Reservation fields and priced amenity lines
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let now = Utc::now();

        let reservation = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            room_id: ActiveValue::Set(params.room_id),
            check_in_date: ActiveValue::Set(params.check_in_date),
            check_out_date: ActiveValue::Set(params.check_out_date),
            num_adults: ActiveValue::Set(params.num_adults),
            num_children: ActiveValue::Set(params.num_children),
            total_price_cents: ActiveValue::Set(params.total_price_cents),
            paid_amount_cents: ActiveValue::Set(0),
            downpayment_cents: ActiveValue::Set(params.downpayment_cents),
            payment_type: ActiveValue::Set(params.payment_type.as_str().to_string()),
            status: ActiveValue::Set(ReservationStatus::Pending.as_str().to_string()),
            payment_status: ActiveValue::Set(PaymentStatus::NotPaid.as_str().to_string()),
            special_requests: ActiveValue::Set(params.special_requests),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for line in params.amenities {
            entity::reservation_amenity::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                amenity_id: ActiveValue::Set(line.amenity_id),
                quantity: ActiveValue::Set(line.quantity),
                unit_price_cents: ActiveValue::Set(line.unit_price_cents),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Reservation::from_entity(reservation)
    }

    /// Gets a reservation by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Gets the amenity lines attached to a reservation.
    pub async fn get_amenity_lines(&self, reservation_id: i32) -> Result<Vec<AmenityLine>, DbErr> {
        let lines = entity::prelude::ReservationAmenity::find()
            .filter(entity::reservation_amenity::Column::ReservationId.eq(reservation_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|line| AmenityLine {
                amenity_id: line.amenity_id,
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect();

        Ok(lines)
    }

    /// Counts non-cancelled reservations on a room whose date range conflicts
    /// with the given one under the inclusive overlap rule.
    ///
    /// Two ranges conflict when `existing.check_in <= new_check_out` and
    /// `existing.check_out >= new_check_in` - a stay ending on day D blocks
    /// another starting on day D.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `check_in` / `check_out` - Candidate date range
    /// - `excluding` - Reservation ID to skip when re-validating a change
    ///
    /// # Returns
    /// - `Ok(count)` - Number of conflicting reservations
    /// - `Err(DbErr)` - Database error
    pub async fn count_overlapping(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        excluding: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut condition = Condition::all()
            .add(entity::reservation::Column::RoomId.eq(room_id))
            .add(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled.as_str()))
            .add(entity::reservation::Column::CheckInDate.lte(check_out))
            .add(entity::reservation::Column::CheckOutDate.gte(check_in));

        if let Some(id) = excluding {
            condition = condition.add(entity::reservation::Column::Id.ne(id));
        }

        entity::prelude::Reservation::find()
            .filter(condition)
            .count(self.db)
            .await
    }

    /// Gets all non-cancelled reservations for a room, ordered by check-in.
    pub async fn get_active_for_room(&self, room_id: i32) -> Result<Vec<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled.as_str()))
            .order_by_asc(entity::reservation::Column::CheckInDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Gets all reservations belonging to a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect()
    }

    /// Counts a user's reservations currently in `pending` or `confirmed`.
    ///
    /// Used to enforce the per-user booking cap.
    pub async fn count_active_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::Status.is_in([
                ReservationStatus::Pending.as_str(),
                ReservationStatus::Confirmed.as_str(),
            ]))
            .count(self.db)
            .await
    }

    /// Sets the lifecycle status of a reservation.
    ///
    /// Transition legality is the lifecycle service's responsibility; this
    /// method only persists the new state.
    pub async fn set_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Reservation, DbErr> {
        let mut active: entity::reservation::ActiveModel = self.require(id).await?.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Reservation::from_entity(active.update(self.db).await?)
    }

    /// Records a check-in: status, acting staff identity, and timestamp.
    pub async fn record_check_in(
        &self,
        id: i32,
        staff_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, DbErr> {
        let mut active: entity::reservation::ActiveModel = self.require(id).await?.into();
        active.status = ActiveValue::Set(ReservationStatus::CheckedIn.as_str().to_string());
        active.actual_check_in = ActiveValue::Set(Some(at));
        active.checked_in_by = ActiveValue::Set(Some(staff_id));
        active.updated_at = ActiveValue::Set(Utc::now());

        Reservation::from_entity(active.update(self.db).await?)
    }

    /// Records a check-out: status, acting staff identity, and timestamp.
    pub async fn record_check_out(
        &self,
        id: i32,
        staff_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, DbErr> {
        let mut active: entity::reservation::ActiveModel = self.require(id).await?.into();
        active.status = ActiveValue::Set(ReservationStatus::CheckedOut.as_str().to_string());
        active.actual_check_out = ActiveValue::Set(Some(at));
        active.checked_out_by = ActiveValue::Set(Some(staff_id));
        active.updated_at = ActiveValue::Set(Utc::now());

        Reservation::from_entity(active.update(self.db).await?)
    }

    /// Records a cancellation: status, reason, actor kind, and timestamp.
    pub async fn record_cancellation(
        &self,
        id: i32,
        reason: &str,
        cancelled_by: CancelledBy,
        at: DateTime<Utc>,
    ) -> Result<Reservation, DbErr> {
        let mut active: entity::reservation::ActiveModel = self.require(id).await?.into();
        active.status = ActiveValue::Set(ReservationStatus::Cancelled.as_str().to_string());
        active.cancellation_reason = ActiveValue::Set(Some(reason.to_string()));
        active.cancelled_by = ActiveValue::Set(Some(cancelled_by.as_str().to_string()));
        active.cancelled_at = ActiveValue::Set(Some(at));
        active.updated_at = ActiveValue::Set(Utc::now());

        Reservation::from_entity(active.update(self.db).await?)
    }

    /// Sets the accumulated paid amount and the derived payment status.
    pub async fn apply_payment(
        &self,
        id: i32,
        paid_amount_cents: i64,
        payment_status: PaymentStatus,
    ) -> Result<Reservation, DbErr> {
        let mut active: entity::reservation::ActiveModel = self.require(id).await?.into();
        active.paid_amount_cents = ActiveValue::Set(paid_amount_cents);
        active.payment_status = ActiveValue::Set(payment_status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Reservation::from_entity(active.update(self.db).await?)
    }

    /// Writes back a refund executed by the manual-refund workflow.
    pub async fn record_refund(
        &self,
        id: i32,
        amount_cents: i64,
        reference: Option<String>,
        payment_status: PaymentStatus,
    ) -> Result<Reservation, DbErr> {
        let mut active: entity::reservation::ActiveModel = self.require(id).await?.into();
        active.refund_amount_cents = ActiveValue::Set(Some(amount_cents));
        active.refund_reference = ActiveValue::Set(reference);
        active.payment_status = ActiveValue::Set(payment_status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Reservation::from_entity(active.update(self.db).await?)
    }

    async fn require(&self, id: i32) -> Result<entity::reservation::Model, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))
    }
}
