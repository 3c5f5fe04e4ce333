//! Room data repository for database operations.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::room::Room;

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a room by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        Ok(entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .map(Room::from_entity))
    }

    /// Gets all rooms ordered by room number.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        Ok(entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect())
    }
}
