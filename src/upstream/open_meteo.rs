use super::types::*;
use super::UpstreamError;
use crate::config::Config;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client for the Open-Meteo geocoding and forecast endpoints. Neither
/// requires a credential.
pub struct OpenMeteoClient {
    client: Client,
    config: Config,
}

impl OpenMeteoClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("DashboardServer/1.0")
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Resolves a free-text city name to coordinates, requesting at most
    /// one candidate.
    pub async fn geocode(&self, city: &str) -> Result<GeocodeSearchResponse, UpstreamError> {
        let url = format!("{}/v1/search", self.config.geocoding_base_url);

        let response = self
            .get_json(&url, &[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .await?;

        let search: GeocodeSearchResponse = serde_json::from_value(response)?;
        Ok(search)
    }

    /// Fetches current conditions only for a coordinate.
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, UpstreamError> {
        let url = format!("{}/v1/forecast", self.config.forecast_base_url);

        let response = self
            .get_json(&url, &[
                ("latitude", &latitude.to_string()),
                ("longitude", &longitude.to_string()),
                ("current_weather", "true"),
            ])
            .await?;

        let forecast: ForecastResponse = serde_json::from_value(response)?;
        Ok(forecast)
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let response = self.client.get(url).query(params).send().await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let json: Value = response.json().await?;
                Ok(json)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(UpstreamError::Status { status, body })
            }
        }
    }
}
