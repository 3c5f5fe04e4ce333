//! Domain models, operation parameter types, and API DTOs.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Status columns are
//! persisted as strings; the typed enums here are the only representation the
//! service layer works with.

pub mod actor;
pub mod api;
pub mod payment;
pub mod reservation;
pub mod room;
