//! Payment domain models and parameter types.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment instrument accepted by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Gcash,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Gcash => "gcash",
            PaymentMethod::Card => "card",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "gcash" => Ok(PaymentMethod::Gcash),
            "card" => Ok(PaymentMethod::Card),
            other => Err(format!("unknown payment method '{}'", other)),
        }
    }
}

/// State of an individual payment attempt.
///
/// At most one `Pending` payment exists per reservation; a new attempt
/// discards the stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::Pending => "pending",
            PaymentState::Completed => "completed",
            PaymentState::Failed => "failed",
            PaymentState::Refunded => "refunded",
        }
    }
}

impl FromStr for PaymentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentState::Pending),
            "completed" => Ok(PaymentState::Completed),
            "failed" => Ok(PaymentState::Failed),
            "refunded" => Ok(PaymentState::Refunded),
            other => Err(format!("unknown payment state '{}'", other)),
        }
    }
}

/// Payment domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub reservation_id: i32,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentState,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            amount_cents: entity.amount_cents,
            method: entity.method.parse().map_err(DbErr::Custom)?,
            status: entity.status.parse().map_err(DbErr::Custom)?,
            reference: entity.reference,
            created_at: entity.created_at,
            paid_at: entity.paid_at,
        })
    }
}

/// Request body for recording a payment attempt against a reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub amount_cents: i64,
    pub method: PaymentMethod,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Payment representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDto {
    pub id: i32,
    pub reservation_id: i32,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentState,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            reservation_id: p.reservation_id,
            amount_cents: p.amount_cents,
            method: p.method,
            status: p.status,
            reference: p.reference,
            created_at: p.created_at,
            paid_at: p.paid_at,
        }
    }
}
