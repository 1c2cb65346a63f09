use async_trait::async_trait;

use crate::application::{app_error::AppResult, dto::github::GithubRepoDTO};

/// Outbound collaborator for the public GitHub repo listing proxy.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self, username: &str) -> AppResult<Vec<GithubRepoDTO>>;
}
