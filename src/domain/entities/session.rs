use crate::domain::entities::{id::Id, user::User};
use chrono::{DateTime, Utc};

/// Opaque bearer token backing: the session id is the token handed out at
/// registration and login.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Id<Session>,
    pub user_id: Id<User>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Id<User>) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
