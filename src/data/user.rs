//! User data repository for database operations.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::model::actor::User;

/// Repository providing database operations for users.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }
}
