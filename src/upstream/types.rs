use serde::{Deserialize, Serialize};

/// Geocoding search payload. The provider omits `results` entirely when a
/// name has no match, so it defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeSearchResponse {
    #[serde(default)]
    pub results: Vec<GeocodeMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
}

/// Headlines payload. The provider regularly nulls out individual article
/// fields, so presence is checked during normalization rather than here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: Option<String>,
    pub source: Option<RawSource>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
}
