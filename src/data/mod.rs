//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories use SeaORM entity models
//! internally and return domain models to maintain separation between the data
//! layer and the business logic layer.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code
//! runs against the pooled connection or inside a transaction; multi-step
//! operations such as availability-check-then-insert rely on this to stay
//! atomic.

pub mod amenity;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
