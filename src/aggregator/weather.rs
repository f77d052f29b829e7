use super::AggregateError;
use crate::cache::{build_key, Lookup, TtlCache};
use crate::upstream::open_meteo::OpenMeteoClient;
use crate::upstream::UpstreamError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Weather entries refresh every 15 minutes.
const WEATHER_TTL: Duration = Duration::from_secs(900);

/// The forecast integration carries no textual conditions; every report
/// gets this fixed description.
const DEFAULT_DESCRIPTION: &str = "Clear sky";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub windspeed: f64,
    pub description: String,
    pub cache_status: bool,
}

pub struct WeatherAggregator {
    upstream: Arc<OpenMeteoClient>,
    cache: TtlCache<WeatherReport>,
}

impl WeatherAggregator {
    pub fn new(upstream: Arc<OpenMeteoClient>) -> Self {
        Self {
            upstream,
            cache: TtlCache::new(WEATHER_TTL),
        }
    }

    /// Resolves current conditions for a city, geocoding it first.
    ///
    /// Results are cached per lowercased city. The stored copy always has
    /// `cache_status = false`; the flag is recomputed on every read rather
    /// than trusted from storage.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherReport, AggregateError> {
        let key = build_key("weather", city);

        if let Lookup::Hit(mut report) = self.cache.lookup(&key).await {
            tracing::debug!(key = %key, "weather cache hit");
            report.cache_status = true;
            return Ok(report);
        }
        tracing::debug!(key = %key, "weather cache miss, calling upstream");

        let location = match self.upstream.geocode(city).await {
            // First candidate wins; the request already caps results at one.
            Ok(search) => match search.results.into_iter().next() {
                Some(location) => location,
                None => return Err(AggregateError::CityNotFound),
            },
            // The geocoder answering with an error status is treated the
            // same as an empty candidate list.
            Err(UpstreamError::Status { .. }) => return Err(AggregateError::CityNotFound),
            Err(err) => return Err(err.into()),
        };

        let forecast = self
            .upstream
            .current_weather(location.latitude, location.longitude)
            .await?;
        let current = forecast.current_weather.ok_or_else(|| {
            AggregateError::MalformedUpstreamPayload("current_weather".to_string())
        })?;

        let report = WeatherReport {
            city: location.name,
            temperature: current.temperature,
            windspeed: current.windspeed,
            description: DEFAULT_DESCRIPTION.to_string(),
            cache_status: false,
        };

        self.cache.store(key, report.clone()).await;
        Ok(report)
    }
}
