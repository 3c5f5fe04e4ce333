//! Payment ledger over reservations.
//!
//! Payments are recorded as pending attempts and later confirmed or rejected
//! by staff. Confirming a payment folds its amount into the reservation's
//! paid total, recomputes the derived payment status, and promotes a pending
//! reservation to confirmed once it is fully paid. Overpayment is accepted
//! and never clamped.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{payment::PaymentRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        actor::Actor,
        payment::{Payment, PaymentState, RecordPaymentRequest},
        reservation::{PaymentStatus, Reservation, ReservationStatus},
    },
    service::collaborator::Notifier,
};

pub struct PaymentLedger<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> PaymentLedger<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Records a pending payment attempt against a reservation.
    ///
    /// Any stale pending payment on the same reservation is discarded first,
    /// which makes retrying a stuck attempt safe.
    ///
    /// # Arguments
    /// - `actor` - Acting user; guests may only pay their own reservations
    /// - `reservation_id` - Reservation the payment is made against
    /// - `request` - Amount, method, and optional gateway reference
    ///
    /// # Returns
    /// - `Ok(Payment)` - The pending payment
    /// - `Err(AppError)` - Validation, authorization, or state conflict
    pub async fn record(
        &self,
        actor: Actor,
        reservation_id: i32,
        request: RecordPaymentRequest,
    ) -> Result<Payment, AppError> {
        if request.amount_cents <= 0 {
            return Err(AppError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let reservation = Self::require_visible_on(&txn, actor, reservation_id).await?;
        if reservation.status == ReservationStatus::Cancelled {
            return Err(AppError::Conflict(
                "Cannot record a payment on a cancelled reservation".to_string(),
            ));
        }

        let (payment, replaced) = PaymentRepository::new(&txn)
            .create_pending(
                reservation_id,
                request.amount_cents,
                request.method,
                request.reference,
            )
            .await?;

        txn.commit().await?;

        if replaced {
            tracing::info!(
                "Discarded stale pending payment on reservation {}",
                reservation_id
            );
        }

        Ok(payment)
    }

    /// Confirms a pending payment and applies it to the reservation.
    ///
    /// Runs in a transaction: the payment completion, the paid-amount update,
    /// and any promotion to confirmed land together or not at all.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be staff
    /// - `payment_id` - Payment to confirm
    ///
    /// # Returns
    /// - `Ok((Payment, Reservation))` - Completed payment and updated reservation
    /// - `Err(AppError)` - Authorization, state conflict, or database error
    pub async fn confirm(
        &self,
        actor: Actor,
        payment_id: i32,
    ) -> Result<(Payment, Reservation), AppError> {
        if !actor.role.is_staff() {
            return Err(AppError::Authorization(
                "Only staff can confirm payments".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let payments = PaymentRepository::new(&txn);
        let reservations = ReservationRepository::new(&txn);

        let payment = payments
            .get_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;
        if payment.status != PaymentState::Pending {
            return Err(AppError::Conflict(
                "Only a pending payment can be confirmed".to_string(),
            ));
        }

        let payment = payments.mark_completed(payment_id, Utc::now()).await?;

        let reservation = reservations
            .get_by_id(payment.reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let paid_cents = reservation.paid_amount_cents + payment.amount_cents;
        let payment_status = PaymentStatus::from_amounts(paid_cents, reservation.total_price_cents);
        let mut reservation = reservations
            .apply_payment(reservation.id, paid_cents, payment_status)
            .await?;

        let promoted = payment_status == PaymentStatus::FullyPaid
            && reservation.status == ReservationStatus::Pending;
        if promoted {
            reservation = reservations
                .set_status(reservation.id, ReservationStatus::Confirmed)
                .await?;
        }

        txn.commit().await?;

        if promoted {
            self.notifier
                .reservation_confirmed(reservation.user_id, reservation.id);
        }

        Ok((payment, reservation))
    }

    /// Rejects a pending payment. The reservation's paid total is untouched.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be staff
    /// - `payment_id` - Payment to reject
    ///
    /// # Returns
    /// - `Ok(Payment)` - The failed payment
    /// - `Err(AppError)` - Authorization or state conflict
    pub async fn reject(&self, actor: Actor, payment_id: i32) -> Result<Payment, AppError> {
        if !actor.role.is_staff() {
            return Err(AppError::Authorization(
                "Only staff can reject payments".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let payments = PaymentRepository::new(&txn);

        let payment = payments
            .get_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;
        if payment.status != PaymentState::Pending {
            return Err(AppError::Conflict(
                "Only a pending payment can be rejected".to_string(),
            ));
        }

        let payment = payments.mark_failed(payment_id).await?;

        txn.commit().await?;

        Ok(payment)
    }

    /// Lists the payments made against a reservation, oldest first.
    pub async fn list_for_reservation(
        &self,
        actor: Actor,
        reservation_id: i32,
    ) -> Result<Vec<Payment>, AppError> {
        Self::require_visible_on(self.db, actor, reservation_id).await?;

        Ok(PaymentRepository::new(self.db)
            .get_by_reservation(reservation_id)
            .await?)
    }

    /// Loads a reservation, enforcing that guests only see their own.
    async fn require_visible_on<C: sea_orm::ConnectionTrait>(
        conn: &C,
        actor: Actor,
        reservation_id: i32,
    ) -> Result<Reservation, AppError> {
        let reservation = ReservationRepository::new(conn)
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if !actor.role.is_staff() && reservation.user_id != actor.user_id {
            return Err(AppError::Authorization(
                "You can only access your own reservations".to_string(),
            ));
        }

        Ok(reservation)
    }
}
