use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_ACTIVE_RESERVATIONS: u64 = 5;
const DEFAULT_DOWNPAYMENT_PERCENT: i64 = 30;
const DEFAULT_REFUND_CUTOFF_HOURS: i64 = 24;

/// Booking-policy knobs passed into the services at construction.
///
/// Replaces the process-wide constants scattered through the legacy handlers.
#[derive(Debug, Clone, Copy)]
pub struct BookingPolicy {
    /// Maximum reservations a user may hold in pending/confirmed at once.
    pub max_active_reservations: u64,
    /// Downpayment rate as a whole percentage of total price.
    pub downpayment_percent: i64,
    /// Free-cancellation window before check-in midnight, in hours.
    pub refund_cutoff_hours: i64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_active_reservations: DEFAULT_MAX_ACTIVE_RESERVATIONS,
            downpayment_percent: DEFAULT_DOWNPAYMENT_PERCENT,
            refund_cutoff_hours: DEFAULT_REFUND_CUTOFF_HOURS,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub policy: BookingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let policy = BookingPolicy {
            max_active_reservations: optional_parsed(
                "MAX_ACTIVE_RESERVATIONS",
                DEFAULT_MAX_ACTIVE_RESERVATIONS,
            )?,
            downpayment_percent: optional_parsed(
                "DOWNPAYMENT_PERCENT",
                DEFAULT_DOWNPAYMENT_PERCENT,
            )?,
            refund_cutoff_hours: optional_parsed(
                "REFUND_CUTOFF_HOURS",
                DEFAULT_REFUND_CUTOFF_HOURS,
            )?,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            policy,
        })
    }
}

fn optional_parsed<T: std::str::FromStr>(var: &str, default: T) -> Result<T, AppError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| {
            AppError::ConfigErr(ConfigError::InvalidValue {
                var: var.to_string(),
                value,
            })
        }),
        Err(_) => Ok(default),
    }
}
