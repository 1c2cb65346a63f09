use crate::{
    application::app_error::AppResult,
    domain::entities::{id::Id, post::Post, user::User},
};
use async_trait::async_trait;

#[async_trait]
pub trait PostReader: Send + Sync {
    async fn find_by_id(&self, post_id: &Id<Post>) -> AppResult<Option<Post>>;
    /// All posts, newest first.
    async fn list(&self) -> AppResult<Vec<Post>>;
}

#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn insert(&self, post: Post) -> AppResult<Id<Post>>;
    /// Persist the embedded like/comment lists (whole-list replacement).
    async fn save_engagement(&self, post: &Post) -> AppResult<()>;
    async fn delete(&self, post_id: &Id<Post>) -> AppResult<()>;
    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
}
