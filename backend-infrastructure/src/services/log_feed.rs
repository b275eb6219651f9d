use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;

use backend_domain::{LogFeed, TrashEvent};

/// Pulls the event list from the `/api/logs` endpoint over HTTP.
pub struct HttpLogFeed {
    client: Client,
    url: String,
}

impl HttpLogFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl LogFeed for HttpLogFeed {
    async fn fetch_logs(&self) -> Result<Vec<TrashEvent>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error! status: {}", status.as_u16()));
        }
        Ok(response.json::<Vec<TrashEvent>>().await?)
    }
}
