use std::path::PathBuf;

use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub struct Args {
    pub log_level: String,
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub sample_file: PathBuf,
    pub user_agent: String,
}

impl Args {
    /// Reads `WEBTOUR_`-prefixed environment variables over built-in defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log_level", "info")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("request_timeout_secs", 5)?
            .set_default("upload_dir", "uploads")?
            .set_default("static_dir", "assets")?
            .set_default("sample_file", "assets/contoh.txt")?
            .set_default("user_agent", "webtour/0.1")?
            .add_source(config::Environment::with_prefix("WEBTOUR"))
            .build()?;

        Ok(config.try_deserialize::<Args>()?)
    }
}
