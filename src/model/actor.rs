//! Authenticated actor identity and roles.
//!
//! Identity issuance lives outside the booking engine; callers resolve an
//! authenticated user into an [`Actor`] before invoking any operation.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of an authenticated user, as stored in the `user.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may perform front-desk and verification actions.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "staff" => Ok(Role::Staff),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated actor performing a booking operation.
///
/// Resolved by the caller from the identity collaborator; the booking engine
/// only checks the role against the operation being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// ID of the acting user.
    pub user_id: i32,
    /// Role of the acting user.
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: i32, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// User domain model, as resolved from the identity collaborator's store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role.parse().map_err(DbErr::Custom)?,
            created_at: entity.created_at,
        })
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }
}
