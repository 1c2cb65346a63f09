use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::github::GithubRepoDTO;
use crate::application::interface::github::RepoSource;

#[derive(Clone)]
pub struct GetGithubReposInteractor {
    repo_source: Arc<dyn RepoSource>,
}

impl GetGithubReposInteractor {
    pub fn new(repo_source: Arc<dyn RepoSource>) -> Self {
        Self { repo_source }
    }

    pub async fn execute(&self, username: String) -> AppResult<Vec<GithubRepoDTO>> {
        self.repo_source.list_repos(&username).await
    }
}
