//! Identities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use hireboard_core::{Actor, Role, UserType};

/// A stored identity.
///
/// `user_type` is parsed when the row is decoded. A value outside the known
/// set fails the decode and surfaces as an internal error.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub user_type: UserType,
    pub is_moderator: bool,
    pub is_profile_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::classify(self.user_type, self.is_moderator)
    }

    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role(), self.is_profile_completed)
    }
}

/// Fields of an identity about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub user_type: UserType,
    pub is_moderator: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub user_type: UserType,
    pub role: Role,
    pub is_moderator: bool,
    pub is_profile_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            role: user.role(),
            id: user.id,
            email: user.email,
            name: user.name,
            user_type: user.user_type,
            is_moderator: user.is_moderator,
            is_profile_completed: user.is_profile_completed,
            created_at: user.created_at,
        }
    }
}
