//! SeaORM entity definitions for the hotel booking engine.
//!
//! One module per table. Status-like columns are stored as plain strings and
//! converted to typed enums at the repository boundary.

pub mod amenity;
pub mod payment;
pub mod reservation;
pub mod reservation_amenity;
pub mod room;
pub mod user;

pub mod prelude {
    pub use super::amenity::Entity as Amenity;
    pub use super::payment::Entity as Payment;
    pub use super::reservation::Entity as Reservation;
    pub use super::reservation_amenity::Entity as ReservationAmenity;
    pub use super::room::Entity as Room;
    pub use super::user::Entity as User;
}
