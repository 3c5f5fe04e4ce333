use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::{
    controller::CurrentUser,
    error::AppError,
    model::reservation::{
        CancelReservationRequest, CreateReservationRequest, QuoteRequest, RecordRefundRequest,
        RefundEligibility, ReservationDto,
    },
    service::booking::BookingService,
    state::AppState,
};

#[derive(Serialize)]
pub struct CancellationDto {
    pub reservation: ReservationDto,
    pub refund: RefundEligibility,
}

fn booking_service(state: &AppState) -> BookingService<'_> {
    BookingService::new(
        &state.db,
        state.policy,
        state.housekeeping.as_ref(),
        state.notifier.as_ref(),
    )
}

/// POST /api/reservations
/// Create a reservation for the acting user
pub async fn create_reservation(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(request): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state)
        .create_reservation(actor, request)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from(reservation))))
}

/// POST /api/reservations/quote
/// Price a prospective stay without creating anything
pub async fn quote(
    State(state): State<AppState>,
    CurrentUser(_actor): CurrentUser,
    Json(request): Json<QuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quote = booking_service(&state).quote(request).await?;

    Ok(Json(quote))
}

/// GET /api/reservations/{id}
/// Get a reservation; guests only see their own
pub async fn get_reservation(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state).get_reservation(actor, id).await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// GET /api/users/{user_id}/reservations
/// List a user's reservations, newest first
pub async fn list_user_reservations(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservations: Vec<ReservationDto> = booking_service(&state)
        .list_for_user(actor, user_id)
        .await?
        .into_iter()
        .map(ReservationDto::from)
        .collect();

    Ok(Json(reservations))
}

/// POST /api/reservations/{id}/confirm
/// Confirm a pending reservation (staff)
pub async fn confirm_reservation(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state).confirm(actor, id).await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// POST /api/reservations/{id}/check-in
/// Check the guest in (staff)
pub async fn check_in(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state).check_in(actor, id, Utc::now()).await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// POST /api/reservations/{id}/check-out
/// Check the guest out and signal housekeeping (staff)
pub async fn check_out(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state)
        .check_out(actor, id, Utc::now())
        .await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// POST /api/reservations/{id}/no-show
/// Mark a reservation as a no-show (staff)
pub async fn mark_no_show(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state).mark_no_show(actor, id).await?;

    Ok(Json(ReservationDto::from(reservation)))
}

/// POST /api/reservations/{id}/cancel
/// Cancel a reservation and report the refund entitlement
pub async fn cancel_reservation(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
    Json(request): Json<CancelReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (reservation, refund) = booking_service(&state).cancel(actor, id, request).await?;

    Ok(Json(CancellationDto {
        reservation: ReservationDto::from(reservation),
        refund,
    }))
}

/// GET /api/reservations/{id}/refund-eligibility
/// Preview the refund a cancellation right now would yield
pub async fn get_refund_eligibility(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let eligibility = booking_service(&state).refund_eligibility(actor, id).await?;

    Ok(Json(eligibility))
}

/// POST /api/reservations/{id}/refund
/// Record a refund executed outside the system (admin)
pub async fn record_refund(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
    Json(request): Json<RecordRefundRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = booking_service(&state)
        .record_refund(actor, id, request)
        .await?;

    Ok(Json(ReservationDto::from(reservation)))
}
