pub mod news;
pub mod weather;

pub use news::{Article, NewsAggregator, NewsDigest};
pub use weather::{WeatherAggregator, WeatherReport};

use crate::upstream::UpstreamError;
use thiserror::Error;

/// Failure taxonomy shared by both aggregators. Every failure is returned
/// as a typed value; nothing is cached on any failure path.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("geocoding returned no match for the requested city")]
    CityNotFound,
    #[error("upstream provider unavailable: {0}")]
    UpstreamUnavailable(#[source] UpstreamError),
    #[error("news provider credential is not configured")]
    MissingCredential,
    #[error("upstream payload shape mismatch: {0}")]
    MalformedUpstreamPayload(String),
}

impl From<UpstreamError> for AggregateError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::MissingCredential => AggregateError::MissingCredential,
            UpstreamError::JsonParsing(e) => AggregateError::MalformedUpstreamPayload(e.to_string()),
            other => AggregateError::UpstreamUnavailable(other),
        }
    }
}
