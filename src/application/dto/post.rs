use chrono::{DateTime, Utc};

use crate::domain::entities::post::{Comment, Like, Post};

#[derive(Debug)]
pub struct CreatePostDTO {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug)]
pub struct PostActionDTO {
    pub user_id: String,
    pub post_id: String,
}

#[derive(Debug)]
pub struct AddCommentDTO {
    pub user_id: String,
    pub post_id: String,
    pub text: String,
}

#[derive(Debug)]
pub struct RemoveCommentDTO {
    pub user_id: String,
    pub post_id: String,
    pub comment_id: String,
}

#[derive(Debug, Clone)]
pub struct PostDTO {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
    pub likes: Vec<LikeDTO>,
    pub comments: Vec<CommentDTO>,
}

#[derive(Debug, Clone)]
pub struct LikeDTO {
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct CommentDTO {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl From<Like> for LikeDTO {
    fn from(like: Like) -> Self {
        Self {
            user_id: like.user_id.value.to_string(),
        }
    }
}

impl From<Comment> for CommentDTO {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.value.to_string(),
            user_id: comment.user_id.value.to_string(),
            name: comment.name,
            avatar: comment.avatar,
            text: comment.text,
            date: comment.date,
        }
    }
}

impl From<Post> for PostDTO {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.value.to_string(),
            user_id: post.user_id.value.to_string(),
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            date: post.date,
            likes: post.likes.into_iter().map(Into::into).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
        }
    }
}
