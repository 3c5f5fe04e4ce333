use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{payment, reservation, room},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/rooms", get(room::list_rooms))
        .route("/api/rooms/{id}", get(room::get_room))
        .route("/api/rooms/{id}/availability", get(room::get_availability))
        .route("/api/rooms/{id}/booked-dates", get(room::get_booked_dates))
        .route(
            "/api/reservations",
            post(reservation::create_reservation),
        )
        .route("/api/reservations/quote", post(reservation::quote))
        .route("/api/reservations/{id}", get(reservation::get_reservation))
        .route(
            "/api/reservations/{id}/confirm",
            post(reservation::confirm_reservation),
        )
        .route("/api/reservations/{id}/check-in", post(reservation::check_in))
        .route(
            "/api/reservations/{id}/check-out",
            post(reservation::check_out),
        )
        .route("/api/reservations/{id}/no-show", post(reservation::mark_no_show))
        .route(
            "/api/reservations/{id}/cancel",
            post(reservation::cancel_reservation),
        )
        .route(
            "/api/reservations/{id}/refund-eligibility",
            get(reservation::get_refund_eligibility),
        )
        .route(
            "/api/reservations/{id}/refund",
            post(reservation::record_refund),
        )
        .route(
            "/api/reservations/{id}/payments",
            post(payment::record_payment).get(payment::list_payments),
        )
        .route("/api/payments/{id}/confirm", post(payment::confirm_payment))
        .route("/api/payments/{id}/reject", post(payment::reject_payment))
        .route(
            "/api/users/{user_id}/reservations",
            get(reservation::list_user_reservations),
        )
}
