use anyhow::Result;

/// Dashboard configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
}

/// Where the detection backend lives and how long requests may take.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Posts per page in the posts table.
    pub page_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api: ApiConfig {
                base_url: std::env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
                timeout_seconds: std::env::var("API_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            dashboard: DashboardConfig {
                page_limit: std::env::var("DASHBOARD_PAGE_LIMIT")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_contract() {
        // Only meaningful when the variables are unset, as in CI.
        if std::env::var("API_BASE_URL").is_err() && std::env::var("API_TIMEOUT_SECONDS").is_err()
        {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api.base_url, "http://localhost:5000");
            assert_eq!(config.api.timeout_seconds, 10);
            assert_eq!(config.dashboard.page_limit, 10);
        }
    }
}
