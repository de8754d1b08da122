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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub records_path: PathBuf,
    pub geocoder_base_url: String,
    /// Sent as `User-Agent`; the public Nominatim instance rejects anonymous clients.
    pub geocoder_user_agent: String,
    /// Appended to every geocoding query, e.g. `"Melbourne, Australia"`.
    pub geocoder_region_suffix: String,
    pub geocoder_timeout_secs: u64,
    pub geocoder_min_interval_ms: u64,
    pub geocoder_max_concurrent: usize,
}
