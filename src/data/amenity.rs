//! Amenity data repository for database operations.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Repository providing database operations for the amenity catalog.
pub struct AmenityRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AmenityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the amenities matching the given IDs. Unknown IDs are simply
    /// absent from the result; callers detect the gap when pricing lines.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::amenity::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
