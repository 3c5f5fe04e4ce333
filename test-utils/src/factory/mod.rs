//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, room, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::room::RoomFactory::new(&db)
//!     .price_per_night_cents(340_000)
//!     .max_adults(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `room` - Create room entities
//! - `amenity` - Create amenity catalog entities
//! - `reservation` - Create reservation entities
//! - `payment` - Create payment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod amenity;
pub mod helpers;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use amenity::create_amenity;
pub use payment::create_payment;
pub use reservation::create_reservation;
pub use room::create_room;
pub use user::{create_staff, create_user};
