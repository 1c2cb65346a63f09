use serde::Serialize;
use utoipa::ToSchema;

use crate::application::dto::github::GithubRepoDTO;

#[derive(Debug, Serialize, ToSchema)]
pub struct GithubRepoResponse {
    pub id: i64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: i64,
    pub watchers_count: i64,
    pub forks_count: i64,
}

impl From<GithubRepoDTO> for GithubRepoResponse {
    fn from(dto: GithubRepoDTO) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            html_url: dto.html_url,
            description: dto.description,
            stargazers_count: dto.stargazers_count,
            watchers_count: dto.watchers_count,
            forks_count: dto.forks_count,
        }
    }
}
