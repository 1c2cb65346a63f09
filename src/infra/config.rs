use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Seconds a session token stays valid after it is issued.
    pub token_ttl: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub api_url: String,
    pub user_agent: String,
    pub per_page: u32,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DatabaseConfig,
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    pub auth: AuthConfig,
    pub github: GithubConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn test_parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
                [db]
                url = "postgres://localhost/devfolio"
                max_connections = 5

                [logger]
                log_path = "logs"

                [application]
                allow_origins = ["*"]
                address = "127.0.0.1:8000"

                [auth]
                token_ttl = 3600

                [github]
                api_url = "https://api.github.com"
                user_agent = "devfolio-backend"
                per_page = 5
                request_timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.token_ttl, 3600);
        assert_eq!(config.github.per_page, 5);
    }
}
