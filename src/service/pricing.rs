//! Price computation for a stay.
//!
//! Pure arithmetic over integer cents: no rounding ever loses a cent except
//! the downpayment, which rounds half up. The engine also owns the stay and
//! guest-count validation that gates every quote.

use chrono::NaiveDate;

use crate::{
    config::BookingPolicy,
    error::AppError,
    model::{
        reservation::{AmenityLine, PriceQuote},
        room::Room,
    },
};

/// A priced amenity selection, resolved against the catalog.
#[derive(Debug, Clone)]
pub struct PricedAmenity {
    pub amenity_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl PricedAmenity {
    pub fn into_line(self) -> AmenityLine {
        AmenityLine {
            amenity_id: self.amenity_id,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
        }
    }
}

pub struct PricingEngine {
    policy: BookingPolicy,
}

impl PricingEngine {
    pub fn new(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    /// Computes the price breakdown for a prospective stay.
    ///
    /// # Arguments
    /// - `room` - Room being booked, carrying the nightly rate and capacity
    /// - `check_in` / `check_out` - Stay boundaries; must span at least one night
    /// - `num_adults` / `num_children` - Guest counts, validated against capacity
    /// - `amenities` - Priced amenity selections
    ///
    /// # Returns
    /// - `Ok(PriceQuote)` - Full breakdown in cents
    /// - `Err(AppError)` - Validation error, detected before any mutation
    pub fn quote(
        &self,
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        num_adults: i32,
        num_children: i32,
        amenities: &[PricedAmenity],
    ) -> Result<PriceQuote, AppError> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(AppError::Validation(
                "Check-out date must be after check-in date".to_string(),
            ));
        }

        if num_adults < 1 {
            return Err(AppError::Validation(
                "At least one adult is required".to_string(),
            ));
        }
        if num_children < 0 {
            return Err(AppError::Validation(
                "Number of children cannot be negative".to_string(),
            ));
        }
        if num_adults + num_children > room.capacity() {
            return Err(AppError::Validation(format!(
                "Room {} holds at most {} guests",
                room.room_number,
                room.capacity()
            )));
        }

        let mut amenity_total_cents = 0i64;
        for amenity in amenities {
            if amenity.quantity < 1 {
                return Err(AppError::Validation(
                    "Amenity quantity must be at least 1".to_string(),
                ));
            }
            amenity_total_cents += amenity.unit_price_cents * amenity.quantity as i64;
        }

        let room_rate_cents = room.price_per_night_cents * nights;
        let total_cents = room_rate_cents + amenity_total_cents;

        Ok(PriceQuote {
            nights,
            room_rate_cents,
            amenity_total_cents,
            total_cents,
            downpayment_cents: self.downpayment(total_cents),
        })
    }

    /// Downpayment as a whole percentage of the total, rounded half up.
    pub fn downpayment(&self, total_cents: i64) -> i64 {
        (total_cents * self.policy.downpayment_percent + 50) / 100
    }
}
