use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Logical endpoint name to path mapping for the remote resort API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    pub all_resorts: String,
    pub single_resort: String,
    pub search_resorts: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            all_resorts: "/resorts".to_string(),
            single_resort: "/resort".to_string(),
            search_resorts: "/resorts/search".to_string(),
        }
    }
}

/// Options for reaching the remote resort API.
///
/// `use_fallback` short-circuits all network access.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: EndpointPaths,
    pub api_key: String,
    pub api_host: String,
    pub use_fallback: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("endpoints", &self.endpoints)
            .field("api_key", &"[redacted]")
            .field("api_host", &self.api_host)
            .field("use_fallback", &self.use_fallback)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub api: ApiConfig,
    pub dataset_path: Option<PathBuf>,
}
