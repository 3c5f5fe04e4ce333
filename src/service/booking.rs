//! Reservation lifecycle orchestration.
//!
//! Creation runs in a transaction so the availability check and the insert
//! land atomically: two guests racing for the same room cannot both pass the
//! check and both book. Lifecycle transitions are monotonic forward with a
//! single escape to cancelled; cancelled, checked-out, and no-show are
//! terminal. Every transition runs its status guard and its write in one
//! transaction so two racing updates cannot both pass the guard.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::BookingPolicy,
    data::{amenity::AmenityRepository, reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{
        actor::{Actor, Role},
        reservation::{
            AmenitySelectionDto, CancelReservationRequest, CreateReservationParams,
            CreateReservationRequest, PaymentStatus, PriceQuote, QuoteRequest,
            RecordRefundRequest, RefundEligibility, Reservation, ReservationStatus,
        },
    },
    service::{
        availability::AvailabilityChecker,
        collaborator::{Housekeeping, Notifier},
        pricing::{PricedAmenity, PricingEngine},
        refund::RefundPolicy,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    policy: BookingPolicy,
    housekeeping: &'a dyn Housekeeping,
    notifier: &'a dyn Notifier,
}

impl<'a> BookingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        policy: BookingPolicy,
        housekeeping: &'a dyn Housekeeping,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            db,
            policy,
            housekeeping,
            notifier,
        }
    }

    /// Creates a new reservation in `pending`.
    ///
    /// The booking cap, the availability check, and the insert all run inside
    /// one transaction against the requested room.
    ///
    /// # Arguments
    /// - `actor` - Acting user; the reservation is booked under their account
    /// - `request` - Room, dates, guest counts, payment intent, amenities
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(AppError)` - Validation error or conflict; nothing was written
    pub async fn create_reservation(
        &self,
        actor: Actor,
        request: CreateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservations = ReservationRepository::new(&txn);

        let room = RoomRepository::new(&txn)
            .get_by_id(request.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let amenities = Self::resolve_amenities(&txn, &request.amenities).await?;

        let quote = PricingEngine::new(self.policy).quote(
            &room,
            request.check_in_date,
            request.check_out_date,
            request.num_adults,
            request.num_children,
            &amenities,
        )?;

        let active = reservations.count_active_for_user(actor.user_id).await?;
        if active >= self.policy.max_active_reservations {
            return Err(AppError::Conflict(
                "Maximum booking limit reached".to_string(),
            ));
        }

        let available = AvailabilityChecker::new(&txn)
            .is_available(
                request.room_id,
                request.check_in_date,
                request.check_out_date,
                None,
            )
            .await?;
        if !available {
            return Err(AppError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ));
        }

        let reservation = reservations
            .create(CreateReservationParams {
                user_id: actor.user_id,
                room_id: request.room_id,
                check_in_date: request.check_in_date,
                check_out_date: request.check_out_date,
                num_adults: request.num_adults,
                num_children: request.num_children,
                total_price_cents: quote.total_cents,
                downpayment_cents: quote.downpayment_cents,
                payment_type: request.payment_type,
                special_requests: request.special_requests,
                amenities: amenities.into_iter().map(PricedAmenity::into_line).collect(),
            })
            .await?;

        txn.commit().await?;

        self.notifier.reservation_created(
            reservation.user_id,
            reservation.id,
            reservation.check_in_date,
        );

        Ok(reservation)
    }

    /// Prices a prospective stay without creating anything.
    pub async fn quote(&self, request: QuoteRequest) -> Result<PriceQuote, AppError> {
        let room = RoomRepository::new(self.db)
            .get_by_id(request.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let amenities = Self::resolve_amenities(self.db, &request.amenities).await?;

        PricingEngine::new(self.policy).quote(
            &room,
            request.check_in_date,
            request.check_out_date,
            request.num_adults,
            request.num_children,
            &amenities,
        )
    }

    /// Confirms a pending reservation.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be staff
    /// - `id` - Reservation ID
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The confirmed reservation
    /// - `Err(AppError)` - Authorization or state conflict
    pub async fn confirm(&self, actor: Actor, id: i32) -> Result<Reservation, AppError> {
        self.require_staff(actor, "confirm reservations")?;

        let txn = self.db.begin().await?;

        let reservation = Self::require_on(&txn, id).await?;
        if reservation.status != ReservationStatus::Pending {
            return Err(AppError::Conflict(
                "Only a pending reservation can be confirmed".to_string(),
            ));
        }

        let reservation = ReservationRepository::new(&txn)
            .set_status(id, ReservationStatus::Confirmed)
            .await?;

        txn.commit().await?;

        self.notifier
            .reservation_confirmed(reservation.user_id, reservation.id);

        Ok(reservation)
    }

    /// Checks a guest in.
    ///
    /// Only a confirmed reservation can check in, and not before its check-in
    /// date.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be staff
    /// - `id` - Reservation ID
    /// - `now` - Check-in instant
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The checked-in reservation
    /// - `Err(AppError)` - Authorization or state conflict
    pub async fn check_in(
        &self,
        actor: Actor,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        self.require_staff(actor, "check guests in")?;

        let txn = self.db.begin().await?;

        let reservation = Self::require_on(&txn, id).await?;
        if reservation.status != ReservationStatus::Confirmed {
            return Err(AppError::Conflict(
                "Only a confirmed reservation can check in".to_string(),
            ));
        }
        if now.date_naive() < reservation.check_in_date {
            return Err(AppError::Conflict(
                "Cannot check in before the check-in date".to_string(),
            ));
        }

        let reservation = ReservationRepository::new(&txn)
            .record_check_in(id, actor.user_id, now)
            .await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Checks a guest out and signals housekeeping for the room.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be staff
    /// - `id` - Reservation ID
    /// - `now` - Check-out instant
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The checked-out reservation
    /// - `Err(AppError)` - Authorization or state conflict
    pub async fn check_out(
        &self,
        actor: Actor,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        self.require_staff(actor, "check guests out")?;

        let txn = self.db.begin().await?;

        let reservation = Self::require_on(&txn, id).await?;
        if reservation.status != ReservationStatus::CheckedIn {
            return Err(AppError::Conflict(
                "Only a checked-in reservation can check out".to_string(),
            ));
        }

        let reservation = ReservationRepository::new(&txn)
            .record_check_out(id, actor.user_id, now)
            .await?;

        txn.commit().await?;

        self.housekeeping.room_needs_cleaning(reservation.room_id);

        Ok(reservation)
    }

    /// Marks a reservation as a no-show.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be staff
    /// - `id` - Reservation ID
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The no-show reservation
    /// - `Err(AppError)` - Authorization or state conflict
    pub async fn mark_no_show(&self, actor: Actor, id: i32) -> Result<Reservation, AppError> {
        self.require_staff(actor, "mark no-shows")?;

        let txn = self.db.begin().await?;

        let reservation = Self::require_on(&txn, id).await?;
        if !matches!(
            reservation.status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        ) {
            return Err(AppError::Conflict(
                "Only a pending or confirmed reservation can be marked no-show".to_string(),
            ));
        }

        let reservation = ReservationRepository::new(&txn)
            .set_status(id, ReservationStatus::NoShow)
            .await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Cancels a reservation and reports the refund entitlement.
    ///
    /// The entitlement is evaluated before the cancellation mutates anything,
    /// so the amount reflects what was paid at the moment of cancelling.
    /// Only a pending, confirmed, or checked-in reservation can be cancelled;
    /// cancelling twice is a conflict.
    ///
    /// # Arguments
    /// - `actor` - Acting user; guests may only cancel their own reservations
    /// - `id` - Reservation ID
    /// - `request` - Cancellation reason, required non-empty
    ///
    /// # Returns
    /// - `Ok((Reservation, RefundEligibility))` - Final state and entitlement
    /// - `Err(AppError)` - Validation, authorization, or state conflict
    pub async fn cancel(
        &self,
        actor: Actor,
        id: i32,
        request: CancelReservationRequest,
    ) -> Result<(Reservation, RefundEligibility), AppError> {
        if request.reason.trim().is_empty() {
            return Err(AppError::Validation(
                "Cancellation reason is required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let reservation = Self::require_visible_on(&txn, actor, id).await?;

        if reservation.status == ReservationStatus::Cancelled {
            return Err(AppError::Conflict(
                "Reservation is already cancelled".to_string(),
            ));
        }
        if !matches!(
            reservation.status,
            ReservationStatus::Pending
                | ReservationStatus::Confirmed
                | ReservationStatus::CheckedIn
        ) {
            return Err(AppError::Conflict(
                "Only a pending, confirmed, or checked-in reservation can be cancelled"
                    .to_string(),
            ));
        }

        let eligibility = RefundPolicy::new(self.policy).evaluate(&reservation, Utc::now());

        let reservation = ReservationRepository::new(&txn)
            .record_cancellation(id, request.reason.trim(), actor.role.into(), Utc::now())
            .await?;

        txn.commit().await?;

        self.notifier.reservation_cancelled(
            reservation.user_id,
            reservation.id,
            eligibility.refund_amount_cents,
        );

        Ok((reservation, eligibility))
    }

    /// Previews the refund a cancellation right now would yield.
    pub async fn refund_eligibility(
        &self,
        actor: Actor,
        id: i32,
    ) -> Result<RefundEligibility, AppError> {
        let reservation = Self::require_visible_on(self.db, actor, id).await?;

        Ok(RefundPolicy::new(self.policy).evaluate(&reservation, Utc::now()))
    }

    /// Writes back a refund executed by the manual-refund workflow.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be admin
    /// - `id` - Reservation ID, must be cancelled
    /// - `request` - Refunded amount and optional gateway reference
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation with the refund recorded
    /// - `Err(AppError)` - Validation, authorization, or state conflict
    pub async fn record_refund(
        &self,
        actor: Actor,
        id: i32,
        request: RecordRefundRequest,
    ) -> Result<Reservation, AppError> {
        if actor.role != Role::Admin {
            return Err(AppError::Authorization(
                "Only admins can record refunds".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let reservation = Self::require_on(&txn, id).await?;
        if reservation.status != ReservationStatus::Cancelled {
            return Err(AppError::Conflict(
                "Refunds apply only to cancelled reservations".to_string(),
            ));
        }
        if request.amount_cents <= 0 {
            return Err(AppError::Validation(
                "Refund amount must be positive".to_string(),
            ));
        }
        if request.amount_cents > reservation.paid_amount_cents {
            return Err(AppError::Validation(
                "Refund cannot exceed the paid amount".to_string(),
            ));
        }

        let payment_status = if request.amount_cents >= reservation.paid_amount_cents {
            PaymentStatus::Refunded
        } else {
            PaymentStatus::PartiallyRefunded
        };

        let reservation = ReservationRepository::new(&txn)
            .record_refund(id, request.amount_cents, request.reference, payment_status)
            .await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Gets a reservation, enforcing that guests only see their own.
    pub async fn get_reservation(&self, actor: Actor, id: i32) -> Result<Reservation, AppError> {
        Self::require_visible_on(self.db, actor, id).await
    }

    /// Lists a user's reservations, newest first.
    ///
    /// Guests may only list their own; staff may list anyone's.
    pub async fn list_for_user(
        &self,
        actor: Actor,
        user_id: i32,
    ) -> Result<Vec<Reservation>, AppError> {
        if !actor.role.is_staff() && actor.user_id != user_id {
            return Err(AppError::Authorization(
                "You can only access your own reservations".to_string(),
            ));
        }

        Ok(ReservationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Resolves amenity selections against the catalog, pricing each line at
    /// the current catalog price.
    async fn resolve_amenities<C: sea_orm::ConnectionTrait>(
        db: &C,
        selections: &[AmenitySelectionDto],
    ) -> Result<Vec<PricedAmenity>, AppError> {
        let ids: Vec<i32> = selections.iter().map(|s| s.amenity_id).collect();
        let catalog = AmenityRepository::new(db).get_by_ids(&ids).await?;

        selections
            .iter()
            .map(|selection| {
                catalog
                    .iter()
                    .find(|a| a.id == selection.amenity_id)
                    .map(|amenity| PricedAmenity {
                        amenity_id: amenity.id,
                        quantity: selection.quantity,
                        unit_price_cents: amenity.price_cents,
                    })
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Amenity {} not found", selection.amenity_id))
                    })
            })
            .collect()
    }

    fn require_staff(&self, actor: Actor, action: &str) -> Result<(), AppError> {
        if actor.role.is_staff() {
            Ok(())
        } else {
            Err(AppError::Authorization(format!("Only staff can {}", action)))
        }
    }

    async fn require_on<C: sea_orm::ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Reservation, AppError> {
        ReservationRepository::new(conn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    async fn require_visible_on<C: sea_orm::ConnectionTrait>(
        conn: &C,
        actor: Actor,
        id: i32,
    ) -> Result<Reservation, AppError> {
        let reservation = Self::require_on(conn, id).await?;

        if !actor.role.is_staff() && reservation.user_id != actor.user_id {
            return Err(AppError::Authorization(
                "You can only access your own reservations".to_string(),
            ));
        }

        Ok(reservation)
    }
}
