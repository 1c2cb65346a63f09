use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::dto::post::{CommentDTO, LikeDTO, PostDTO};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
}

impl From<LikeDTO> for LikeResponse {
    fn from(dto: LikeDTO) -> Self {
        Self {
            user_id: dto.user_id,
        }
    }
}

impl From<CommentDTO> for CommentResponse {
    fn from(dto: CommentDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            name: dto.name,
            avatar: dto.avatar,
            text: dto.text,
            date: dto.date,
        }
    }
}

impl From<PostDTO> for PostResponse {
    fn from(dto: PostDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            text: dto.text,
            name: dto.name,
            avatar: dto.avatar,
            date: dto.date,
            likes: dto.likes.into_iter().map(Into::into).collect(),
            comments: dto.comments.into_iter().map(Into::into).collect(),
        }
    }
}
