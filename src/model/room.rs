//! Room domain model.
//!
//! The room catalog (rates, capacity) is a read-only collaborator of the
//! booking engine; operational room status is owned by housekeeping.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub price_per_night_cents: i64,
    pub max_adults: i32,
    pub max_children: i32,
    /// Operational status string, passed through untyped; not owned here.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_number: entity.room_number,
            price_per_night_cents: entity.price_per_night_cents,
            max_adults: entity.max_adults,
            max_children: entity.max_children,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    /// Total capacity, adults plus children.
    pub fn capacity(&self) -> i32 {
        self.max_adults + self.max_children
    }
}

/// Room representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub price_per_night_cents: i64,
    pub max_adults: i32,
    pub max_children: i32,
    pub status: String,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            room_number: r.room_number,
            price_per_night_cents: r.price_per_night_cents,
            max_adults: r.max_adults,
            max_children: r.max_children,
            status: r.status,
        }
    }
}
