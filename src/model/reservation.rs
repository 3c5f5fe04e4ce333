//! Reservation domain models and parameter types.
//!
//! The reservation is the central entity of the booking engine. Its two status
//! columns are persisted as strings and converted to the enums defined here at
//! the repository boundary.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a reservation.
///
/// Transitions are monotonic forward with a single escape to `Cancelled`;
/// `Cancelled` and `CheckedOut` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Cancelled | ReservationStatus::CheckedOut
        )
    }

    /// Whether the reservation counts toward the per-user booking cap.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        )
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "checked_in" => Ok(ReservationStatus::CheckedIn),
            "checked_out" => Ok(ReservationStatus::CheckedOut),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "no_show" => Ok(ReservationStatus::NoShow),
            other => Err(format!("unknown reservation status '{}'", other)),
        }
    }
}

/// Derived classification of how much of the total price has been paid.
///
/// A pure function of `paid_amount_cents` vs `total_price_cents` except for
/// the refund states, which the manual-refund workflow writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    NotPaid,
    PartiallyPaid,
    FullyPaid,
    Refunded,
    PartiallyRefunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::NotPaid => "not_paid",
            PaymentStatus::PartiallyPaid => "partially_paid",
            PaymentStatus::FullyPaid => "fully_paid",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::PartiallyRefunded => "partially_refunded",
        }
    }

    /// Recomputes the status from amounts, per the ledger thresholds.
    pub fn from_amounts(paid_cents: i64, total_cents: i64) -> Self {
        if paid_cents <= 0 {
            PaymentStatus::NotPaid
        } else if paid_cents < total_cents {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::FullyPaid
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_paid" => Ok(PaymentStatus::NotPaid),
            "partially_paid" => Ok(PaymentStatus::PartiallyPaid),
            "fully_paid" => Ok(PaymentStatus::FullyPaid),
            "refunded" => Ok(PaymentStatus::Refunded),
            "partially_refunded" => Ok(PaymentStatus::PartiallyRefunded),
            other => Err(format!("unknown payment status '{}'", other)),
        }
    }
}

/// How the guest intends to settle the reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Downpayment,
    FullPayment,
    CashOnArrival,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Downpayment => "downpayment",
            PaymentType::FullPayment => "full_payment",
            PaymentType::CashOnArrival => "cash_on_arrival",
        }
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "downpayment" => Ok(PaymentType::Downpayment),
            "full_payment" => Ok(PaymentType::FullPayment),
            "cash_on_arrival" => Ok(PaymentType::CashOnArrival),
            other => Err(format!("unknown payment type '{}'", other)),
        }
    }
}

/// Kind of actor that cancelled a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelledBy {
    User,
    Staff,
    Admin,
}

impl CancelledBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancelledBy::User => "user",
            CancelledBy::Staff => "staff",
            CancelledBy::Admin => "admin",
        }
    }
}

impl FromStr for CancelledBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(CancelledBy::User),
            "staff" => Ok(CancelledBy::Staff),
            "admin" => Ok(CancelledBy::Admin),
            other => Err(format!("unknown cancellation actor '{}'", other)),
        }
    }
}

impl From<super::actor::Role> for CancelledBy {
    fn from(role: super::actor::Role) -> Self {
        match role {
            super::actor::Role::Guest => CancelledBy::User,
            super::actor::Role::Staff => CancelledBy::Staff,
            super::actor::Role::Admin => CancelledBy::Admin,
        }
    }
}

/// Reservation domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_adults: i32,
    pub num_children: i32,
    pub total_price_cents: i64,
    pub paid_amount_cents: i64,
    pub downpayment_cents: i64,
    pub payment_type: PaymentType,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub cancellation_reason: Option<String>,
    pub cancelled_by: Option<CancelledBy>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub actual_check_in: Option<DateTime<Utc>>,
    pub checked_in_by: Option<i32>,
    pub actual_check_out: Option<DateTime<Utc>>,
    pub checked_out_by: Option<i32>,
    pub refund_amount_cents: Option<i64>,
    pub refund_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Unknown status strings indicate a corrupted row and surface as
    /// `DbErr::Custom`.
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            room_id: entity.room_id,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            num_adults: entity.num_adults,
            num_children: entity.num_children,
            total_price_cents: entity.total_price_cents,
            paid_amount_cents: entity.paid_amount_cents,
            downpayment_cents: entity.downpayment_cents,
            payment_type: entity.payment_type.parse().map_err(DbErr::Custom)?,
            status: entity.status.parse().map_err(DbErr::Custom)?,
            payment_status: entity.payment_status.parse().map_err(DbErr::Custom)?,
            special_requests: entity.special_requests,
            cancellation_reason: entity.cancellation_reason,
            cancelled_by: entity
                .cancelled_by
                .map(|s| s.parse().map_err(DbErr::Custom))
                .transpose()?,
            cancelled_at: entity.cancelled_at,
            actual_check_in: entity.actual_check_in,
            checked_in_by: entity.checked_in_by,
            actual_check_out: entity.actual_check_out,
            checked_out_by: entity.checked_out_by,
            refund_amount_cents: entity.refund_amount_cents,
            refund_reference: entity.refund_reference,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Number of nights in the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Remaining amount to be paid, never negative.
    pub fn due_amount_cents(&self) -> i64 {
        (self.total_price_cents - self.paid_amount_cents).max(0)
    }
}

/// An amenity line on a reservation, with its quantity and the unit price
/// captured at booking time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityLine {
    pub amenity_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

/// Parameters for inserting a new reservation with its amenity lines.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_adults: i32,
    pub num_children: i32,
    pub total_price_cents: i64,
    pub downpayment_cents: i64,
    pub payment_type: PaymentType,
    pub special_requests: Option<String>,
    pub amenities: Vec<AmenityLine>,
}

/// Refund entitlement computed at cancellation time.
///
/// Consumed by the external manual-refund workflow; the booking engine moves
/// no money itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundEligibility {
    pub eligible: bool,
    pub refund_amount_cents: i64,
    pub refund_percentage: u8,
    /// Hours from evaluation time to check-in midnight. Absent when the
    /// reservation was already cancelled and no recomputation happened.
    pub hours_until_check_in: Option<f64>,
    /// Last instant at which a full refund was still available.
    pub deadline: Option<DateTime<Utc>>,
    pub reason: String,
}

/// Price breakdown for a prospective stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub nights: i64,
    pub room_rate_cents: i64,
    pub amenity_total_cents: i64,
    pub total_cents: i64,
    pub downpayment_cents: i64,
}

/// Amenity selection as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenitySelectionDto {
    pub amenity_id: i32,
    pub quantity: i32,
}

/// Request body for creating a reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationRequest {
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default = "default_adults")]
    pub num_adults: i32,
    #[serde(default)]
    pub num_children: i32,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub amenities: Vec<AmenitySelectionDto>,
}

fn default_adults() -> i32 {
    1
}

/// Request body for cancelling a reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelReservationRequest {
    pub reason: String,
}

/// Request body for pricing a prospective stay without creating it.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default = "default_adults")]
    pub num_adults: i32,
    #[serde(default)]
    pub num_children: i32,
    #[serde(default)]
    pub amenities: Vec<AmenitySelectionDto>,
}

/// Request body for the manual-refund workflow writing back a refund.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRefundRequest {
    pub amount_cents: i64,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Reservation representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i64,
    pub num_adults: i32,
    pub num_children: i32,
    pub total_price_cents: i64,
    pub paid_amount_cents: i64,
    pub due_amount_cents: i64,
    pub downpayment_cents: i64,
    pub payment_type: PaymentType,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub cancellation_reason: Option<String>,
    pub cancelled_by: Option<CancelledBy>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub actual_check_in: Option<DateTime<Utc>>,
    pub actual_check_out: Option<DateTime<Utc>>,
    pub refund_amount_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            nights: r.nights(),
            due_amount_cents: r.due_amount_cents(),
            id: r.id,
            user_id: r.user_id,
            room_id: r.room_id,
            check_in_date: r.check_in_date,
            check_out_date: r.check_out_date,
            num_adults: r.num_adults,
            num_children: r.num_children,
            total_price_cents: r.total_price_cents,
            paid_amount_cents: r.paid_amount_cents,
            downpayment_cents: r.downpayment_cents,
            payment_type: r.payment_type,
            status: r.status,
            payment_status: r.payment_status,
            special_requests: r.special_requests,
            cancellation_reason: r.cancellation_reason,
            cancelled_by: r.cancelled_by,
            cancelled_at: r.cancelled_at,
            actual_check_in: r.actual_check_in,
            actual_check_out: r.actual_check_out,
            refund_amount_cents: r.refund_amount_cents,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
