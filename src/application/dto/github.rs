use serde::Deserialize;

/// The slice of the GitHub repos API the client cares about; everything
/// else in the upstream payload is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepoDTO {
    pub id: i64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub watchers_count: i64,
    #[serde(default)]
    pub forks_count: i64,
}
