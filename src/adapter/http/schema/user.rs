use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_email::Email;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::dto::user::UserDTO;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[schema(value_type = String)]
    pub email: Email,
    #[validate(length(
        min = 6,
        message = "Please enter a password with 6 or more characters"
    ))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserDTO> for UserResponse {
    fn from(dto: UserDTO) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            avatar: dto.avatar,
            created_at: dto.created_at,
        }
    }
}
