use crate::{
    data::reservation::ReservationRepository,
    model::reservation::{
        AmenityLine, CancelledBy, CreateReservationParams, PaymentStatus, PaymentType,
        ReservationStatus,
    },
};
use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_payment;
mod count_active_for_user;
mod count_overlapping;
mod create;
mod lifecycle;
mod record_refund;

/// Default creation parameters for a two-night stay.
fn params(
    user_id: i32,
    room_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> CreateReservationParams {
    CreateReservationParams {
        user_id,
        room_id,
        check_in_date: check_in,
        check_out_date: check_out,
        num_adults: 2,
        num_children: 0,
        total_price_cents: 200_000,
        downpayment_cents: 60_000,
        payment_type: PaymentType::FullPayment,
        special_requests: None,
        amenities: Vec::new(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
