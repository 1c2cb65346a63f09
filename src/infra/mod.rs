use std::sync::Arc;
use std::time::Duration;

use crate::adapter::crypto::argon2::ArgonCredentialsHasher;
use crate::adapter::github::api::GithubApiClient;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub mod config;
pub mod setup;
pub mod app;
pub mod db;
pub mod state;

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(&config).await?;
    let hasher = ArgonCredentialsHasher::default();
    let github = GithubApiClient::new(
        config.github.api_url.clone(),
        config.github.user_agent.clone(),
        config.github.per_page,
        Duration::from_secs(config.github.request_timeout_secs),
    )?;

    Ok(AppState {
        pool,
        hasher: Arc::new(hasher),
        github: Arc::new(github),
        config: Arc::new(config),
    })
}
