use std::path::PathBuf;
use std::time::Duration;

use crate::core::client::Client;
use crate::core::config::Args;
use crate::core::error::ConfigError;

#[derive(Clone, Debug)]
pub struct AppState {
    pub client: Client,
    pub(crate) upload_dir: PathBuf,
    pub(crate) static_dir: PathBuf,
    pub(crate) sample_file: PathBuf,
    pub(crate) request_timeout: Duration,
}

impl AppState {
    pub fn new(config: &Args) -> Result<Self, ConfigError> {
        Ok(Self {
            client: Client::new(&config.user_agent)?,
            upload_dir: config.upload_dir.clone(),
            static_dir: config.static_dir.clone(),
            sample_file: config.sample_file.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }
}
