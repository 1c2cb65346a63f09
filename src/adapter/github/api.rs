use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::warn;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::github::GithubRepoDTO;
use crate::application::interface::github::RepoSource;

/// Reqwest-backed client for the public GitHub repos listing. Owns transport
/// details only: headers, timeout, status mapping and JSON decoding.
#[derive(Clone)]
pub struct GithubApiClient {
    client: Client,
    api_url: String,
    per_page: u32,
}

impl GithubApiClient {
    pub fn new(
        api_url: String,
        user_agent: String,
        per_page: u32,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            api_url,
            per_page,
        })
    }
}

#[async_trait]
impl RepoSource for GithubApiClient {
    async fn list_repos(&self, username: &str) -> AppResult<Vec<GithubRepoDTO>> {
        let url = format!("{}/users/{}/repos", self.api_url, username);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("per_page", self.per_page.to_string()),
                ("sort", "created:asc".to_string()),
            ])
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|err| {
                warn!("GitHub request failed: {err}");
                AppError::GithubUnavailable
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::GithubUserNotFound),
            status if status.is_success() => {
                response.json::<Vec<GithubRepoDTO>>().await.map_err(|err| {
                    warn!("GitHub response decode failed: {err}");
                    AppError::GithubUnavailable
                })
            }
            status => {
                warn!("GitHub returned {status} for {username}");
                Err(AppError::GithubUnavailable)
            }
        }
    }
}
