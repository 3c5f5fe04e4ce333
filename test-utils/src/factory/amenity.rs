//! Amenity factory for creating test amenity catalog entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test amenities with customizable fields.
pub struct AmenityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price_cents: i64,
}

impl<'a> AmenityFactory<'a> {
    /// Creates a new AmenityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Amenity {id}"` where id is auto-incremented
    /// - price_cents: `5_000`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AmenityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Amenity {}", id),
            price_cents: 5_000,
        }
    }

    /// Sets the amenity name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unit price in cents.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Builds and inserts the amenity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::amenity::Model)` - Created amenity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::amenity::Model, DbErr> {
        entity::amenity::ActiveModel {
            name: ActiveValue::Set(self.name),
            price_cents: ActiveValue::Set(self.price_cents),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an amenity with default values.
///
/// Shorthand for `AmenityFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::amenity::Model)` - Created amenity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_amenity(db: &DatabaseConnection) -> Result<entity::amenity::Model, DbErr> {
    AmenityFactory::new(db).build().await
}
