use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the pipe-delimited movie table
    #[serde(default = "default_movies_path")]
    pub movies_path: PathBuf,

    /// Path to the tab-delimited rating table
    #[serde(default = "default_ratings_path")]
    pub ratings_path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("movies_100k.csv")
}

fn default_ratings_path() -> PathBuf {
    PathBuf::from("ratings_100k.csv")
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
