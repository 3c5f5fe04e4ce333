use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::{
    controller::CurrentUser,
    error::AppError,
    model::{
        payment::{PaymentDto, RecordPaymentRequest},
        reservation::ReservationDto,
    },
    service::payment::PaymentLedger,
    state::AppState,
};

#[derive(Serialize)]
pub struct ConfirmedPaymentDto {
    pub payment: PaymentDto,
    pub reservation: ReservationDto,
}

fn payment_ledger(state: &AppState) -> PaymentLedger<'_> {
    PaymentLedger::new(&state.db, state.notifier.as_ref())
}

/// POST /api/reservations/{id}/payments
/// Record a pending payment attempt against a reservation
pub async fn record_payment(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(reservation_id): Path<i32>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payment = payment_ledger(&state)
        .record(actor, reservation_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(PaymentDto::from(payment))))
}

/// GET /api/reservations/{id}/payments
/// List the payments made against a reservation, oldest first
pub async fn list_payments(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payments: Vec<PaymentDto> = payment_ledger(&state)
        .list_for_reservation(actor, reservation_id)
        .await?
        .into_iter()
        .map(PaymentDto::from)
        .collect();

    Ok(Json(payments))
}

/// POST /api/payments/{id}/confirm
/// Confirm a pending payment and apply it to the reservation (staff)
pub async fn confirm_payment(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (payment, reservation) = payment_ledger(&state).confirm(actor, id).await?;

    Ok(Json(ConfirmedPaymentDto {
        payment: PaymentDto::from(payment),
        reservation: ReservationDto::from(reservation),
    }))
}

/// POST /api/payments/{id}/reject
/// Reject a pending payment (staff)
pub async fn reject_payment(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payment = payment_ledger(&state).reject(actor, id).await?;

    Ok(Json(PaymentDto::from(payment)))
}
