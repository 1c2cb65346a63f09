use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        profile::{Profile, ProfileWithUser},
        user::User,
    },
};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
    async fn find_with_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileWithUser>>;
    async fn list_with_user(&self) -> AppResult<Vec<ProfileWithUser>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    /// Insert-or-replace keyed by `user_id`. Scalar fields, skills and
    /// social links are replaced; stored experience/education lists are
    /// left untouched. Returns the row as stored.
    async fn upsert(&self, profile: Profile) -> AppResult<Profile>;
    /// Persist the embedded experience/education lists of an existing
    /// profile (whole-list replacement).
    async fn save_entries(&self, profile: &Profile) -> AppResult<()>;
    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
}
