use async_trait::async_trait;

use super::{ClientError, ClientResult, FeedClient};
use crate::domain::FeedEvent;

pub struct HttpFeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeedClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {}: {}", base_url, e)))?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn list_events(&self) -> ClientResult<Vec<FeedEvent>> {
        let url = format!("{}/events", self.base_url);
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("request to {} failed: {}", url, e)))?
            .error_for_status()
            .map_err(|e| ClientError::Transport(format!("server error from {}: {}", url, e)))?;

        response
            .json::<Vec<FeedEvent>>()
            .await
            .map_err(|e| ClientError::Decode(format!("invalid event payload: {}", e)))
    }
}
