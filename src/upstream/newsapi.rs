use super::types::HeadlinesResponse;
use super::UpstreamError;
use crate::config::Config;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client for the NewsAPI top-headlines endpoint. The API key is optional
/// at construction; a call without one fails before any request is sent.
pub struct NewsApiClient {
    client: Client,
    config: Config,
}

impl NewsApiClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("DashboardServer/1.0")
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetches English-language top headlines filtered by category.
    pub async fn top_headlines(&self, category: &str) -> Result<HeadlinesResponse, UpstreamError> {
        let api_key = self
            .config
            .news_api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential)?;

        let url = format!("{}/v2/top-headlines", self.config.news_base_url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", api_key)
            .query(&[("category", category), ("language", "en")])
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let json: Value = response.json().await?;
                let headlines: HeadlinesResponse = serde_json::from_value(json)?;
                Ok(headlines)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(UpstreamError::Status { status, body })
            }
        }
    }
}
