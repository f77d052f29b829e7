use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub geocoding_base_url: String,
    pub forecast_base_url: String,
    pub news_base_url: String,
    pub news_api_key: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            geocoding_base_url: env::var("GEOCODING_BASE_URL")
                .unwrap_or_else(|_| "https://geocoding-api.open-meteo.com".to_string()),
            forecast_base_url: env::var("FORECAST_BASE_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com".to_string()),
            news_base_url: env::var("NEWS_BASE_URL")
                .unwrap_or_else(|_| "https://newsapi.org".to_string()),
            // Absence is reported as MissingCredential when news is requested,
            // so a weather-only deployment can still start.
            news_api_key: env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}
