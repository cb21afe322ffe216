use tracing::instrument;

use crate::core::error::{ConfigError, Error};

/// Outbound HTTP client. Wraps a pooled `reqwest::Client` built once at
/// startup with the configured user agent.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn new(user_agent: &str) -> Result<Self, ConfigError> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    #[instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String, Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        Ok(response.text().await?)
    }
}
