//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db)
///     .price_per_night_cents(340_000)
///     .max_adults(2)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    price_per_night_cents: i64,
    max_adults: i32,
    max_children: i32,
    status: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"R{id}"` where id is auto-incremented
    /// - price_per_night_cents: `100_000`
    /// - max_adults: `2`
    /// - max_children: `2`
    /// - status: `"available"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RoomFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            room_number: format!("R{}", id),
            price_per_night_cents: 100_000,
            max_adults: 2,
            max_children: 2,
            status: "available".to_string(),
        }
    }

    /// Sets the room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the nightly rate in cents.
    pub fn price_per_night_cents(mut self, price: i64) -> Self {
        self.price_per_night_cents = price;
        self
    }

    /// Sets the maximum number of adults.
    pub fn max_adults(mut self, max_adults: i32) -> Self {
        self.max_adults = max_adults;
        self
    }

    /// Sets the maximum number of children.
    pub fn max_children(mut self, max_children: i32) -> Self {
        self.max_children = max_children;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            price_per_night_cents: ActiveValue::Set(self.price_per_night_cents),
            max_adults: ActiveValue::Set(self.max_adults),
            max_children: ActiveValue::Set(self.max_children),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::room::Model)` - Created room entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
