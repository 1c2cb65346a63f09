use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password: String, avatar: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            email,
            password,
            avatar,
            created_at: Utc::now(),
        }
    }
}
