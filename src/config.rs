use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL (recommendation cache)
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Recommendation engine base URL
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    /// Optional API key forwarded to the recommendation engine
    #[serde(default)]
    pub engine_api_key: Option<String>,

    /// Directory holding the cuisine image pool
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// Image served when the pool is empty
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_engine_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_images_dir() -> String {
    "static/images/cuisines".to_string()
}

fn default_fallback_image() -> String {
    "default.jpg".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
